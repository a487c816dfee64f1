//! Static catalog of daily health and fitness tips.

/// A single health tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthTip {
    pub id: u32,
    pub text: &'static str,
    pub category: &'static str,
}

const HEALTH_TIPS: &[HealthTip] = &[
    HealthTip {
        id: 1,
        text: "💧 Drink at least 8 glasses of water daily to stay hydrated and boost metabolism.",
        category: "hydration",
    },
    HealthTip {
        id: 2,
        text: "🚶 Walk 10,000 steps daily to maintain cardiovascular health and burn calories.",
        category: "cardio",
    },
    HealthTip {
        id: 3,
        text: "😴 Get 7-9 hours of quality sleep each night for better recovery and performance.",
        category: "sleep",
    },
    HealthTip {
        id: 4,
        text: "🥗 Eat colorful vegetables to get a variety of nutrients and antioxidants.",
        category: "nutrition",
    },
    HealthTip {
        id: 5,
        text: "💪 Include strength training 2-3 times per week to build muscle and bone density.",
        category: "strength",
    },
    HealthTip {
        id: 6,
        text: "🧘 Practice meditation or deep breathing for 10 minutes daily to reduce stress.",
        category: "mindfulness",
    },
    HealthTip {
        id: 7,
        text: "🍎 Start your day with a healthy breakfast to boost energy and metabolism.",
        category: "nutrition",
    },
    HealthTip {
        id: 8,
        text: "⏱️ Do high-intensity interval training (HIIT) for maximum calorie burn in minimal time.",
        category: "cardio",
    },
    HealthTip {
        id: 9,
        text: "🤝 Exercise with a friend to stay motivated and make fitness more enjoyable.",
        category: "social",
    },
    HealthTip {
        id: 10,
        text: "🏋️ Warm up for 5-10 minutes before workouts to prevent injuries.",
        category: "safety",
    },
    HealthTip {
        id: 11,
        text: "🌞 Get sunlight exposure for 15-20 minutes daily for vitamin D production.",
        category: "health",
    },
    HealthTip {
        id: 12,
        text: "🚫 Avoid processed foods and choose whole grains for better nutrition.",
        category: "nutrition",
    },
    HealthTip {
        id: 13,
        text: "🧠 Set realistic fitness goals and track your progress regularly.",
        category: "mindset",
    },
    HealthTip {
        id: 14,
        text: "🍌 Eat a banana before workouts for quick energy and potassium.",
        category: "pre-workout",
    },
    HealthTip {
        id: 15,
        text: "🛏️ Establish a consistent sleep schedule by going to bed at the same time daily.",
        category: "sleep",
    },
    HealthTip {
        id: 16,
        text: "☕ Limit caffeine intake after 3 PM to avoid sleep disruption.",
        category: "sleep",
    },
    HealthTip {
        id: 17,
        text: "🏃 Do light stretching for 5 minutes after workouts to improve flexibility.",
        category: "recovery",
    },
    HealthTip {
        id: 18,
        text: "🥤 Replace sugary drinks with water or herbal tea to reduce empty calories.",
        category: "hydration",
    },
    HealthTip {
        id: 19,
        text: "📱 Take breaks from screens every 30 minutes to reduce eye strain.",
        category: "wellness",
    },
    HealthTip {
        id: 20,
        text: "🎯 Find a workout routine you enjoy - consistency beats perfection!",
        category: "mindset",
    },
];

/// The full tip catalog, in rotation order.
pub fn health_tips() -> &'static [HealthTip] {
    HEALTH_TIPS
}

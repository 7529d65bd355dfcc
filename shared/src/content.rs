//! Static page content
//!
//! The programme cards, meal catalog, FAQ entries, and the sample progress
//! series. Data only; layout and widgets belong to the page.

use serde::Serialize;

/// One programme card
#[derive(Debug, Clone, Serialize)]
pub struct Programme {
    pub title: &'static str,
    pub level: &'static str,
    pub description: &'static str,
    pub bullets: &'static [&'static str],
}

/// The three programme cards
pub fn programmes() -> &'static [Programme] {
    const PROGRAMMES: &[Programme] = &[
        Programme {
            title: "Beginner Reset",
            level: "Easy",
            description: "Gentle 4-week on-ramp: clean eating, light movement, daily habits.",
            bullets: &["10-15 min mobility", "Plate method meals", "Weekend prep"],
        },
        Programme {
            title: "Strength + Loss",
            level: "Intermediate",
            description: "12-week plan mixing resistance training with smart calories.",
            bullets: &["3x/week lifts", "Protein target", "NEAT goals"],
        },
        Programme {
            title: "Cardio Builder",
            level: "All levels",
            description: "Interval walks/runs + simple fueling for steady fat loss.",
            bullets: &["Zone 2 base", "1 interval day", "Daily steps"],
        },
    ];
    PROGRAMMES
}

/// One meal card with its modal recipe
#[derive(Debug, Clone, Serialize)]
pub struct Meal {
    pub title: &'static str,
    pub kcal: u32,
    pub protein_g: u32,
    pub tags: &'static [&'static str],
    pub recipe: &'static str,
}

/// The four meal cards
pub fn meals() -> &'static [Meal] {
    const MEALS: &[Meal] = &[
        Meal {
            title: "Mediterranean Bowl",
            kcal: 520,
            protein_g: 28,
            tags: &["High-fiber", "30-min"],
            recipe: "1 cup cooked quinoa\n\
                     1 cup chopped cucumbers & tomatoes\n\
                     1/2 cup chickpeas\n\
                     Olives, parsley, lemon, 1 tbsp olive oil\n\
                     Top with grilled chicken or tofu.",
        },
        Meal {
            title: "Veggie Omelet & Berries",
            kcal: 380,
            protein_g: 24,
            tags: &["Breakfast", "Low-carb"],
            recipe: "3 eggs (or 1 egg + 3 whites), peppers, spinach, onions.\n\
                     Side: 1 cup mixed berries.",
        },
        Meal {
            title: "Salmon Sheet-Pan Dinner",
            kcal: 610,
            protein_g: 40,
            tags: &["Omega-3", "1-pan"],
            recipe: "Salmon fillet with lemon & herbs.\n\
                     Roast with broccoli and sweet potato cubes 20-25 min @ 205°C.",
        },
        Meal {
            title: "Lentil & Kale Soup",
            kcal: 430,
            protein_g: 22,
            tags: &["Budget", "Batch-cook"],
            recipe: "Brown lentils, onion, carrot, celery, garlic, tomatoes, kale.\n\
                     Simmer 35-40 min; portion & freeze.",
        },
    ];
    MEALS
}

/// One FAQ accordion entry
#[derive(Debug, Clone, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// The FAQ entries
pub fn faq() -> &'static [FaqEntry] {
    const FAQ: &[FaqEntry] = &[
        FaqEntry {
            question: "Do I need to cut out carbs?",
            answer: "Not necessarily. Many people lose weight with balanced plates: plenty of \
                     veg & fruit, adequate protein, mostly minimally processed carbs, and \
                     healthy fats. Choose an approach you can stick with.",
        },
        FaqEntry {
            question: "How fast should I aim to lose?",
            answer: "A common, sustainable pace is about 0.25-1.0 kg per week. Faster loss can \
                     increase the chance of regaining. Personalize with your clinician.",
        },
        FaqEntry {
            question: "Is exercise required?",
            answer: "Nutrition drives most early change, but movement helps preserve muscle, \
                     supports health, and makes maintenance easier. Start with walks and a \
                     couple of short strength sessions per week.",
        },
    ];
    FAQ
}

/// One point in the example weigh-in series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressPoint {
    pub week: u32,
    pub weight_kg: f64,
}

/// The 8-week example series behind the progress chart
pub fn sample_progress() -> &'static [ProgressPoint] {
    const PROGRESS: &[ProgressPoint] = &[
        ProgressPoint { week: 1, weight_kg: 86.0 },
        ProgressPoint { week: 2, weight_kg: 85.6 },
        ProgressPoint { week: 3, weight_kg: 85.1 },
        ProgressPoint { week: 4, weight_kg: 84.5 },
        ProgressPoint { week: 5, weight_kg: 84.1 },
        ProgressPoint { week: 6, weight_kg: 83.4 },
        ProgressPoint { week: 7, weight_kg: 83.0 },
        ProgressPoint { week: 8, weight_kg: 82.4 },
    ];
    PROGRESS
}

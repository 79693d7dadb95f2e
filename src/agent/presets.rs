//! The three agent configurations, as data.

use super::AgentSpec;

/// Certified-dietician agent. Web search is available for uncommon
/// ingredients or eating patterns.
pub fn dietary_planner(model: &str) -> AgentSpec {
    AgentSpec {
        name: "dietary_planner",
        model: model.to_string(),
        description: "Creates personalized dietary plans based on user profile, activity level, and goals.",
        instructions: &[
            "You are a certified dietician designing high-precision meal plans.",
            "Every meal plan should be tailored explicitly to the user's age, BMI, activity level, and dietary preference.",
            "Do NOT reuse the same meal structure across profiles; each plan must be distinct.",
            "Use variations across different food categories (cereal, fruits, proteins, dairy, etc.)",
            "Incorporate portion size, meal timing, and nutrient breakdown.",
            "For higher activity levels, adjust caloric surplus and protein intake accordingly.",
            "For weight loss, use calorie deficit with high-fiber and high-protein food swaps.",
            "Always explain WHY a certain food group or meal is included.",
            "Never provide generic or templated responses.",
            "You may use the web_search tool if uncommon ingredients or patterns are requested.",
        ],
        web_search: true,
    }
}

/// Workout-routine agent.
pub fn fitness_trainer(model: &str) -> AgentSpec {
    AgentSpec {
        name: "fitness_trainer",
        model: model.to_string(),
        description: "Generates customized workout routines based on fitness goals.",
        instructions: &[
            "Create a workout plan including warm-ups, main exercises, and cool-downs.",
            "Adjust workouts based on fitness level: Beginner, Intermediate, Advanced.",
            "Consider weight loss, muscle gain, endurance, or flexibility goals.",
            "Provide safety tips and injury prevention advice.",
            "Suggest progress tracking methods for motivation.",
            "If necessary, search the web using the web_search tool for additional information.",
        ],
        web_search: true,
    }
}

/// Merging agent: combines the meal and workout plans into one strategy.
pub fn team_lead(model: &str) -> AgentSpec {
    AgentSpec {
        name: "team_lead",
        model: model.to_string(),
        description: "Combines diet and workout plans into a holistic health strategy.",
        instructions: &[
            "Merge personalized diet and fitness plans for a comprehensive approach. Use tables if possible.",
            "Ensure alignment between diet and exercise for optimal results.",
            "Suggest lifestyle tips for motivation and consistency.",
            "Provide guidance on tracking progress and adjusting plans over time.",
        ],
        web_search: false,
    }
}

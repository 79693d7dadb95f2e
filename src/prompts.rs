//! Prompt builders for the three agent calls.
//!
//! Pure functions of the profile (plus derived BMI): identical input always
//! yields byte-identical prompt text. Whether the model's answer varies is
//! outside this module's control.

use crate::profile::Profile;

/// Briefing for the dietary planner agent.
///
/// Embeds the full profile, including the derived BMI rounded to two
/// decimals, and asks for a specific daily plan rather than a template.
pub fn meal_plan_prompt(profile: &Profile) -> String {
    format!(
        "You are a certified nutritionist.\n\n\
         Create a daily meal plan (breakfast, lunch, dinner, snacks) tailored to the following profile:\n\n\
         - Age: {age} years\n\
         - Gender: {gender}\n\
         - Weight: {weight} kg\n\
         - Height: {height} cm\n\
         - BMI: {bmi:.2} (categorize it)\n\
         - Activity Level: {activity}\n\
         - Dietary Preference: {diet}\n\
         - Cuisine Preference: {cuisine}\n\
         - Allergies/Restrictions: {allergies}\n\
         - Fitness Goal: {goal}\n\n\
         Make the plan specific and distinct. Avoid generic recommendations.\n\
         Include nutrient breakdown, meal timing, and substitution tips.\n\
         Ensure alignment with the goal (caloric deficit/surplus/maintenance).\n",
        age = profile.age,
        gender = profile.gender,
        weight = profile.weight_kg,
        height = profile.height_cm,
        bmi = profile.bmi(),
        activity = profile.activity_level,
        diet = profile.dietary_preference,
        cuisine = profile.cuisine_preference,
        allergies = profile.allergies,
        goal = profile.fitness_goal,
    )
}

/// Request for the fitness trainer agent.
pub fn fitness_plan_prompt(profile: &Profile) -> String {
    format!(
        "Generate a workout plan for a {age}-year-old person, weighing {weight}kg, \
         {height}cm tall, with an activity level of '{activity}', \
         aiming to achieve '{goal}'. Include warm-ups, exercises, and cool-downs.",
        age = profile.age,
        weight = profile.weight_kg,
        height = profile.height_cm,
        activity = profile.activity_level,
        goal = profile.fitness_goal,
    )
}

/// Merge request for the team lead agent.
///
/// Both plan texts are embedded verbatim so the merge operates on exactly
/// what the planner agents produced.
pub fn merge_prompt(profile: &Profile, meal_plan: &str, fitness_plan: &str) -> String {
    format!(
        "Greet the customer, {name}\n\n\
         User Information: {age} years old, {weight}kg, {height}cm, activity level: {activity}.\n\n\
         Fitness Goal: {goal}\n\n\
         Meal Plan:\n{meal_plan}\n\n\
         Workout Plan:\n{fitness_plan}\n\n\
         Provide a holistic health strategy integrating both plans.",
        name = profile.name,
        age = profile.age,
        weight = profile.weight_kg,
        height = profile.height_cm,
        activity = profile.activity_level,
        goal = profile.fitness_goal,
    )
}

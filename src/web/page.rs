//! The embedded form page.
//!
//! Single static page: sidebar form, main panel for the rendered plan, and
//! a motivational footer card shown once a plan arrives. The fetch call to
//! /api/plan blocks the UI behind a spinner for the duration of the three
//! agent calls.

pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>AI Health &amp; Fitness Plan</title>
<style>
  body { margin: 0; font-family: "Segoe UI", Helvetica, Arial, sans-serif; background: #FFFFFF; color: #262730; }
  .layout { display: flex; min-height: 100vh; }
  .sidebar { width: 320px; background-color: #F5F5F5; padding: 20px; border-radius: 10px; box-sizing: border-box; }
  .sidebar h2 { margin-top: 0; }
  .sidebar label { display: block; margin-top: 14px; font-size: 14px; font-weight: 600; }
  .sidebar input, .sidebar select { width: 100%; padding: 8px; margin-top: 4px; border: 1px solid #CCC; border-radius: 5px; box-sizing: border-box; }
  .main { flex: 1; padding: 20px 40px; }
  .title { text-align: center; font-size: 48px; font-weight: bold; color: #FF6347; }
  .subtitle { text-align: center; font-size: 24px; color: #4CAF50; }
  .btn { display: inline-block; background-color: #FF6347; color: white; padding: 10px 20px; text-align: center; border: none; border-radius: 5px; font-weight: bold; cursor: pointer; margin-top: 16px; width: 100%; font-size: 16px; }
  .btn:disabled { opacity: 0.6; cursor: wait; }
  .warning { color: #B71C1C; background: #FFEBEE; padding: 10px; border-radius: 5px; margin-top: 12px; display: none; }
  .content { padding: 20px; background-color: #E0F7FA; border-radius: 10px; margin-top: 20px; display: none; }
  .content table { border-collapse: collapse; margin: 10px 0; }
  .content th, .content td { border: 1px solid #B0BEC5; padding: 6px 10px; }
  .spinner { display: none; margin-top: 20px; font-size: 18px; }
  .info { background: #E3F2FD; padding: 10px; border-radius: 5px; margin-top: 12px; display: none; }
  .goal-card { padding: 20px; margin: 10px 0; background-color: #FFF; border-radius: 10px; box-shadow: 2px 2px 10px rgba(0, 0, 0, 0.1); display: none; }
  hr { margin: 24px 0; }
</style>
</head>
<body>
<div class="layout">
  <aside class="sidebar">
    <h2>&#9881;&#65039; Health &amp; Fitness Inputs</h2>
    <p>Personalize Your Fitness Plan</p>
    <label for="age">Age (in years)</label>
    <input id="age" type="number" min="10" max="100" value="25" required>
    <label for="weight">Weight (in kg)</label>
    <input id="weight" type="number" min="30" max="200" value="70" required>
    <label for="height">Height (in cm)</label>
    <input id="height" type="number" min="100" max="250" value="170" required>
    <label for="activity_level">Activity Level</label>
    <select id="activity_level">
      <option>Low</option><option>Moderate</option><option>High</option>
    </select>
    <label for="dietary_preference">Dietary Preference</label>
    <select id="dietary_preference">
      <option>Keto</option><option>Vegetarian</option><option>Low Carb</option><option>Balanced</option>
    </select>
    <label for="fitness_goal">Fitness Goal</label>
    <select id="fitness_goal">
      <option>Weight Loss</option><option>Muscle Gain</option><option>Endurance</option><option>Flexibility</option>
    </select>
    <label for="gender">Gender</label>
    <select id="gender">
      <option>Male</option><option>Female</option><option>Other</option>
    </select>
    <label for="cuisine_preference">Cuisine Preference</label>
    <select id="cuisine_preference">
      <option>Indian</option><option>Mediterranean</option><option>Continental</option><option>Asian</option><option>No Preference</option>
    </select>
    <label for="allergies">Any allergies or food restrictions?</label>
    <input id="allergies" type="text" value="None">
    <button id="generate" class="btn">Generate Health Plan</button>
    <div id="warning" class="warning"></div>
  </aside>
  <main class="main">
    <h1 class="title">&#127947;&#65039; AI Health &amp; Fitness Plan Generator</h1>
    <p class="subtitle">Personalized fitness and nutrition plans to help you achieve your health goals!</p>
    <hr>
    <h3>&#127939; Personal Fitness Profile</h3>
    <label for="name">What's your name?</label>
    <input id="name" type="text" value="John Doe" style="padding:8px;border:1px solid #CCC;border-radius:5px;">
    <div id="spinner" class="spinner">&#128165; Generating your personalized health &amp; fitness plan...</div>
    <div id="plan-section">
      <div id="content" class="content"></div>
      <div id="info" class="info">This is your customized health and fitness strategy, including meal and workout plans.</div>
      <div id="goal-card" class="goal-card">
        <h4>&#127942; Stay Focused, Stay Fit!</h4>
        <p>Consistency is key! Keep pushing yourself, and you will see results. Your fitness journey starts now!</p>
      </div>
    </div>
  </main>
</div>
<script>
const $ = (id) => document.getElementById(id);

function showWarning(message) {
  const warning = $("warning");
  warning.textContent = message;
  warning.style.display = "block";
}

$("generate").addEventListener("click", async () => {
  $("warning").style.display = "none";
  const age = Number($("age").value);
  const weight = Number($("weight").value);
  const height = Number($("height").value);

  if (!age || !weight || !height) {
    showWarning("Please fill in all required fields.");
    return;
  }

  const profile = {
    name: $("name").value || "John Doe",
    age: age,
    weight: weight,
    height: height,
    gender: $("gender").value,
    activity_level: $("activity_level").value,
    dietary_preference: $("dietary_preference").value,
    cuisine_preference: $("cuisine_preference").value,
    fitness_goal: $("fitness_goal").value,
    allergies: $("allergies").value || "None"
  };

  $("generate").disabled = true;
  $("spinner").style.display = "block";
  $("content").style.display = "none";
  $("info").style.display = "none";
  $("goal-card").style.display = "none";

  try {
    const response = await fetch("/api/plan", {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify(profile)
    });
    const body = await response.json();
    if (!response.ok) {
      showWarning(body.error || "Plan generation failed.");
      return;
    }
    $("content").innerHTML = "<h3>Your Personalized Health & Fitness Plan</h3>" + body.plan_html;
    $("content").style.display = "block";
    $("info").style.display = "block";
    $("goal-card").style.display = "block";
  } catch (err) {
    showWarning("Plan generation failed: " + err);
  } finally {
    $("generate").disabled = false;
    $("spinner").style.display = "none";
  }
});
</script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_has_form_fields_and_bounds() {
        assert!(INDEX_HTML.contains("Generate Health Plan"));
        assert!(INDEX_HTML.contains(r#"min="10" max="100" value="25""#));
        assert!(INDEX_HTML.contains(r#"min="30" max="200" value="70""#));
        assert!(INDEX_HTML.contains(r#"min="100" max="250" value="170""#));
        assert!(INDEX_HTML.contains("No Preference"));
        assert!(INDEX_HTML.contains("John Doe"));
    }
}

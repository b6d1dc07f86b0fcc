//! First-run sample project provisioning.
//!
//! Creates a starter ChoiceScript game under the root document path so a new
//! user has something to open. Idempotent: if the project directory already
//! exists nothing is written.

use std::path::Path;

use crate::fs::{FileProvider, FsError};

pub const SAMPLE_PROJECT_DIR: &str = "MyChoiceScriptGame";

pub const STARTUP_FILE: &str = "startup.txt";
pub const STATS_FILE: &str = "choicescript_stats.txt";

pub const STARTUP_CONTENT: &str = r#"*title My First ChoiceScript Game
*author Your Name

Welcome to your first ChoiceScript game!

This is the beginning of your interactive story. What would you like to do?

*choice
  #Explore the mysterious forest
    You venture into the dark forest, leaves crunching under your feet.
    *goto forest_scene
  #Visit the bustling marketplace
    You head towards the crowded marketplace, full of interesting sights and sounds.
    *goto market_scene
  #Return home to rest
    You decide to go back home and rest for the day.
    *finish

*label forest_scene
You find yourself deep in the mysterious forest. Ancient trees tower above you.

*choice
  #Climb a tall tree
    You carefully climb up the oak tree and get a bird's eye view of the area.
    *finish
  #Follow a winding path
    The path leads you to a hidden clearing with a beautiful pond.
    *finish

*label market_scene
The marketplace buzzes with activity. Merchants call out their wares.

*choice
  #Buy some food
    You purchase fresh bread and fruit from a friendly vendor.
    *finish
  #Listen to the town crier
    You learn interesting news about the kingdom.
    *finish"#;

pub const STATS_CONTENT: &str = r#"*comment This file contains the variable definitions for your game.

*create strength 50
*create intelligence 50
*create charisma 50

*comment You can add more variables here as needed for your story."#;

/// Ensures the sample project exists under `root`. Returns `Ok(true)` if the
/// project was created, `Ok(false)` if it was already there. Callable at any
/// time, independent of startup sequencing.
pub fn ensure_sample_project(
    provider: &dyn FileProvider,
    root: &Path,
) -> Result<bool, FsError> {
    let project_dir = root.join(SAMPLE_PROJECT_DIR);
    if provider.exists(&project_dir) {
        return Ok(false);
    }

    provider.create_dir_all(&project_dir)?;
    provider.write_file(&project_dir.join(STARTUP_FILE), STARTUP_CONTENT)?;
    provider.write_file(&project_dir.join(STATS_FILE), STATS_CONTENT)?;

    tracing::info!(dir = %project_dir.display(), "sample project created");
    Ok(true)
}

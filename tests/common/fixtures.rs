//! Reusable configuration contents.

/// Unattended config with a working copy at `app/`
pub const STEADY_CONFIG: &str = r#"{
	"app-name": "demo",
	"app-path": "app/",
	"auto-run": true,
	"step-count": 7
}
"#;

/// Config written by a wizard run whose first deploy was declined
pub const MANUAL_CONFIG: &str = r#"{
	"app-name": "demo",
	"app-path": "app/",
	"auto-run": false,
	"step-count": 0
}
"#;

/// `app-path` has the wrong type
pub const INVALID_CONFIG: &str = r#"{"app-name": "demo", "app-path": 7}"#;

/// Every step the workflow tracks, in order
pub const STEP_DESCRIPTIONS: &[&str] = &[
    "Loading config file",
    "Checking first run",
    "Checking git cli utility",
    "Checking gcloud cli utility",
    "Fetching repository information",
    "Resetting repository to head",
    "Cleaning repository leftovers",
    "Pulling newest state from origin/master",
    "Deploying application to google cloud",
];

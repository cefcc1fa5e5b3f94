//! Fixed build recipe for the managed build service.

use serde_json::json;

/// Standard runtime image the build runs on.
pub const BUILD_IMAGE: &str = "aws/codebuild/standard:5.0";

/// The build specification: dependency install, then the build command.
///
/// Deliberately not customizable. The build step is a pass-through
/// convenience for projects that need transpiling before deploy, not a
/// compilation engine.
pub fn buildspec() -> serde_json::Value {
    json!({
        "version": "0.2",
        "phases": {
            "install": {
                "commands": ["npm install"],
            },
            "build": {
                "commands": ["npm run build"],
            },
        },
        "artifacts": {
            "files": ["**/*"],
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buildspec_shape() {
        let spec = buildspec();

        assert_eq!(spec["version"], "0.2");
        assert_eq!(spec["phases"]["install"]["commands"][0], "npm install");
        assert_eq!(spec["phases"]["build"]["commands"][0], "npm run build");
        assert_eq!(spec["artifacts"]["files"][0], "**/*");
    }
}

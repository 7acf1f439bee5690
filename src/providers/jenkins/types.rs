//! Wire shape of the Jenkins JSON API as requested with the `tree=` projection.
//!
//! Every field is optional: older jobs, deleted artifacts and half-written
//! builds all show up as missing or null keys, and those are a reason to skip
//! a build rather than to reject the whole payload. Builds are kept as raw
//! JSON until the adapter decodes them one by one, so a single entry of the
//! wrong shape cannot take its siblings down with it.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiResult {
    #[serde(default)]
    pub builds: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Build {
    pub number: Option<u32>,
    /// Canonical build page, normally ending with `/`
    pub url: Option<String>,
    /// Epoch milliseconds; Jenkins reports `0` when unknown
    pub timestamp: Option<i64>,
    /// e.g. "SUCCESS", "FAILURE", or null while the build is running
    pub result: Option<String>,
    pub artifacts: Option<Vec<Option<Artifact>>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub relative_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(json: &str) -> serde_json::Result<Build> {
        serde_json::from_str(json)
    }

    #[test]
    fn test_missing_fields_decode_as_none() {
        let build = build("{}").unwrap();

        assert!(build.number.is_none());
        assert!(build.url.is_none());
        assert!(build.artifacts.is_none());
        assert!(build.timestamp.is_none());
    }

    #[test]
    fn test_null_fields_decode_as_none() {
        let build = build(r#"{"number":null,"url":null,"timestamp":null,"artifacts":[null]}"#).unwrap();

        assert!(build.number.is_none());
        assert!(build.url.is_none());
        assert!(build.timestamp.is_none());
        assert!(build.artifacts.unwrap()[0].is_none());
    }

    #[test]
    fn test_builds_are_kept_raw() {
        let result: ApiResult =
            serde_json::from_str(r#"{"builds":[null,{"number":"7"},{"number":3}]}"#).unwrap();
        let builds = result.builds.unwrap();

        assert_eq!(builds.len(), 3);
        assert!(builds[0].is_null());
        assert!(serde_json::from_value::<Build>(builds[1].clone()).is_err());
        assert_eq!(serde_json::from_value::<Build>(builds[2].clone()).unwrap().number, Some(3));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let build = build(
            r#"{"_class":"hudson.model.FreeStyleBuild","number":1,"artifacts":[{"fileName":"a.zip","relativePath":"build/a.zip"}]}"#,
        )
        .unwrap();
        let artifacts = build.artifacts.unwrap();

        assert_eq!(
            artifacts[0].as_ref().unwrap().relative_path.as_deref(),
            Some("build/a.zip")
        );
    }

    #[test]
    fn test_wrong_builds_type_is_a_decode_error() {
        assert!(serde_json::from_str::<ApiResult>(r#"{"builds":"none"}"#).is_err());
    }

    #[test]
    fn test_negative_build_number_is_a_decode_error() {
        assert!(build(r#"{"number":-1}"#).is_err());
    }
}

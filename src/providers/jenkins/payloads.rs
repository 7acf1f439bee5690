//! Recorded and hand-trimmed Jenkins API responses used by the adapter tests.

pub const BUILD_URL: &str = "http://jenkins.terasology.org/job/DistroOmega/1/";
pub const RELATIVE_PATH: &str = "distros/omega/build/distributions/TerasologyOmega.zip";
pub const TIMESTAMP: i64 = 1_609_713_454_443;

pub fn valid() -> &'static str {
    r#"{
  "_class": "hudson.model.FreeStyleProject",
  "builds": [
    {
      "_class": "hudson.model.FreeStyleBuild",
      "artifacts": [
        {
          "fileName": "TerasologyOmega.zip",
          "relativePath": "distros/omega/build/distributions/TerasologyOmega.zip"
        },
        {
          "fileName": "versionInfo.properties",
          "relativePath": "distros/omega/build/resources/main/org/terasology/version/versionInfo.properties"
        }
      ],
      "number": 1,
      "result": "SUCCESS",
      "timestamp": 1609713454443,
      "url": "http://jenkins.terasology.org/job/DistroOmega/1/",
      "changeSet": {
        "_class": "hudson.scm.EmptyChangeLogSet",
        "items": [],
        "kind": null
      }
    }
  ]
}"#
}

pub fn minimal_valid() -> &'static str {
    r#"{
  "builds": [
    {
      "artifacts": [
        { "relativePath": "distros/omega/build/distributions/TerasologyOmega.zip" }
      ],
      "number": 1,
      "timestamp": 1609713454443,
      "url": "http://jenkins.terasology.org/job/DistroOmega/1/"
    }
  ]
}"#
}

pub fn failed_build() -> &'static str {
    r#"{
  "builds": [
    {
      "artifacts": [
        { "relativePath": "distros/omega/build/distributions/TerasologyOmega.zip" }
      ],
      "number": 1,
      "result": "FAILURE",
      "timestamp": 1609713454443,
      "url": "http://jenkins.terasology.org/job/DistroOmega/1/"
    }
  ]
}"#
}

/// First build lacks its number, second build is complete.
pub fn malformed_then_valid() -> &'static str {
    r#"{
  "builds": [
    {
      "artifacts": [
        { "relativePath": "distros/omega/build/distributions/TerasologyOmega.zip" }
      ],
      "timestamp": 1609713000000,
      "url": "http://jenkins.terasology.org/job/DistroOmega/2/"
    },
    {
      "artifacts": [
        { "relativePath": "distros/omega/build/distributions/TerasologyOmega.zip" }
      ],
      "number": 1,
      "timestamp": 1609713454443,
      "url": "http://jenkins.terasology.org/job/DistroOmega/1/"
    }
  ]
}"#
}

/// Single builds that must be skipped without affecting their neighbours.
pub fn broken_builds() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "null artifact",
            r#"{"number":2,"url":"http://jenkins.terasology.org/job/DistroOmega/2/","timestamp":1609713000000,"artifacts":[null]}"#,
        ),
        (
            "null number",
            r#"{"number":null,"url":"http://jenkins.terasology.org/job/DistroOmega/2/","timestamp":1609713000000,"artifacts":[{"relativePath":"a/TerasologyOmega.zip"}]}"#,
        ),
        (
            "zero number",
            r#"{"number":0,"url":"http://jenkins.terasology.org/job/DistroOmega/0/","timestamp":1609713000000,"artifacts":[{"relativePath":"a/TerasologyOmega.zip"}]}"#,
        ),
        (
            "negative number",
            r#"{"number":-1,"url":"http://jenkins.terasology.org/job/DistroOmega/2/","timestamp":1609713000000,"artifacts":[{"relativePath":"a/TerasologyOmega.zip"}]}"#,
        ),
        (
            "number as string",
            r#"{"number":"7","url":"http://jenkins.terasology.org/job/DistroOmega/7/","timestamp":1609713000000,"artifacts":[{"relativePath":"a/TerasologyOmega.zip"}]}"#,
        ),
        (
            "timestamp as string",
            r#"{"number":2,"url":"http://jenkins.terasology.org/job/DistroOmega/2/","timestamp":"yesterday","artifacts":[{"relativePath":"a/TerasologyOmega.zip"}]}"#,
        ),
        (
            "artifacts as object",
            r#"{"number":2,"url":"http://jenkins.terasology.org/job/DistroOmega/2/","timestamp":1609713000000,"artifacts":{"relativePath":"a/TerasologyOmega.zip"}}"#,
        ),
        ("build as string", r#""DistroOmega #2""#),
        ("null build", "null"),
    ]
}

/// Wraps `broken` in a build list, followed by the build of [`valid`].
pub fn with_valid_sibling(broken: &str) -> String {
    format!(
        r#"{{"builds":[{broken},{{"number":1,"url":"{BUILD_URL}","timestamp":{TIMESTAMP},"artifacts":[{{"relativePath":"{RELATIVE_PATH}"}}]}}]}}"#
    )
}

/// Payloads that decode fine but contain no usable build.
pub fn incompatible() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "missing number",
            r#"{"builds":[{"artifacts":[{"relativePath":"a/TerasologyOmega.zip"}],"timestamp":1609713454443,"url":"http://jenkins.terasology.org/job/DistroOmega/1/"}]}"#,
        ),
        (
            "missing url",
            r#"{"builds":[{"artifacts":[{"relativePath":"a/TerasologyOmega.zip"}],"number":1,"timestamp":1609713454443}]}"#,
        ),
        (
            "missing artifacts",
            r#"{"builds":[{"number":1,"timestamp":1609713454443,"url":"http://jenkins.terasology.org/job/DistroOmega/1/"}]}"#,
        ),
        (
            "empty artifacts",
            r#"{"builds":[{"artifacts":[],"number":1,"timestamp":1609713454443,"url":"http://jenkins.terasology.org/job/DistroOmega/1/"}]}"#,
        ),
        (
            "artifact without relative path",
            r#"{"builds":[{"artifacts":[{"fileName":"TerasologyOmega.zip"}],"number":1,"timestamp":1609713454443,"url":"http://jenkins.terasology.org/job/DistroOmega/1/"}]}"#,
        ),
        (
            "relative build url",
            r#"{"builds":[{"artifacts":[{"relativePath":"a/TerasologyOmega.zip"}],"number":1,"timestamp":1609713454443,"url":"job/DistroOmega/1/"}]}"#,
        ),
        ("null build", r#"{"builds":[null]}"#),
        ("empty builds", r#"{"builds":[]}"#),
        ("missing builds", r#"{}"#),
    ]
}

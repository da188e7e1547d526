use crate::error::ApiError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two test artifacts an Android module carries next to its main artifact.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TestVariant {
    /// Instrumentation tests, run on a device (`src/androidTest`).
    AndroidTest,
    /// Local JVM tests (`src/test`).
    UnitTest,
}

impl TestVariant {
    pub const ALL: [TestVariant; 2] = [TestVariant::AndroidTest, TestVariant::UnitTest];

    /// The variant whose files are foreign to this one.
    pub fn other(self) -> Self {
        match self {
            TestVariant::AndroidTest => TestVariant::UnitTest,
            TestVariant::UnitTest => TestVariant::AndroidTest,
        }
    }

    /// Artifact name used by the Android Gradle model.
    pub fn artifact_name(self) -> &'static str {
        match self {
            TestVariant::AndroidTest => "_android_test_",
            TestVariant::UnitTest => "_unit_test_",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TestVariant::AndroidTest => "android-test",
            TestVariant::UnitTest => "unit-test",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            TestVariant::AndroidTest => 0,
            TestVariant::UnitTest => 1,
        }
    }
}

impl fmt::Display for TestVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestVariant {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "android-test" | "android_test" | "androidtest" | "_android_test_" => {
                Ok(TestVariant::AndroidTest)
            }
            "unit-test" | "unit_test" | "unittest" | "test" | "_unit_test_" => {
                Ok(TestVariant::UnitTest)
            }
            _ => Err(ApiError::UnknownVariant(s.to_string())),
        }
    }
}

/// Small fixed map keyed by [`TestVariant`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerVariant<T> {
    slots: [T; 2],
}

impl<T> PerVariant<T> {
    pub fn get(&self, variant: TestVariant) -> &T {
        &self.slots[variant.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_is_involutive() {
        for variant in TestVariant::ALL {
            assert_ne!(variant, variant.other());
            assert_eq!(variant, variant.other().other());
        }
    }

    #[test]
    fn test_parse_variant_names() {
        assert_eq!(
            "android-test".parse::<TestVariant>().unwrap(),
            TestVariant::AndroidTest
        );
        assert_eq!(
            "_unit_test_".parse::<TestVariant>().unwrap(),
            TestVariant::UnitTest
        );
        assert!("integration".parse::<TestVariant>().is_err());
    }
}

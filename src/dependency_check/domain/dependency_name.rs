use std::fmt;

macro_rules! string_value_object {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_value_object!(
    /// Maven group identifier, e.g. `com.squareup.retrofit2`
    GroupId
);
string_value_object!(
    /// Maven artifact identifier, e.g. `retrofit`
    ArtifactId
);
string_value_object!(
    /// Dependency version as reported by the analysis tool
    ///
    /// Versions are compared as plain strings; no ordering semantics are applied.
    Version
);

/// `groupId:artifactId` identity of a dependency, ignoring its version
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FullyQualifiedName {
    group_id: GroupId,
    artifact_id: ArtifactId,
}

impl FullyQualifiedName {
    pub fn new(group_id: GroupId, artifact_id: ArtifactId) -> Self {
        Self {
            group_id,
            artifact_id,
        }
    }

    pub fn value(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }
}

impl fmt::Display for FullyQualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

/// Full coordinates of a dependency
///
/// Two names are equal only when group, artifact and version all match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyName {
    group_id: GroupId,
    artifact_id: ArtifactId,
    version: Version,
}

impl DependencyName {
    pub fn new(group_id: GroupId, artifact_id: ArtifactId, version: Version) -> Self {
        Self {
            group_id,
            artifact_id,
            version,
        }
    }

    /// Shorthand for building a name from raw strings
    pub fn from_parts(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self::new(
            GroupId::new(group_id),
            ArtifactId::new(artifact_id),
            Version::new(version),
        )
    }

    pub fn group_id(&self) -> &GroupId {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &ArtifactId {
        &self.artifact_id
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn fully_qualified_name(&self) -> FullyQualifiedName {
        FullyQualifiedName::new(self.group_id.clone(), self.artifact_id.clone())
    }

    /// `groupId:artifactId:version`
    pub fn fully_qualified_name_with_version(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

impl fmt::Display for DependencyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fully_qualified_name_with_version())
    }
}

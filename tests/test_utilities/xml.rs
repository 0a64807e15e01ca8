//! Builders for the XML reports of the two Gradle plugins

/// `(group, name, version, milestone)`
pub type Outdated<'a> = (&'a str, &'a str, &'a str, &'a str);
/// `(group, name, version)`
pub type Current<'a> = (&'a str, &'a str, &'a str);

pub const OKIO_PATH: &str = "/Users/dev/.gradle/caches/modules-2/files-2.1/com.squareup.okio/okio/1.14.0/102d7be47241d781ef95f1581d414b0943053130/okio-1.14.0.jar";
pub const RETROFIT_PATH: &str = "/Users/dev/.gradle/caches/modules-2/files-2.1/com.squareup.retrofit2/retrofit/2.4.0/fc4aa382632bfaa7be7b41579efba41d5a71ecf3/retrofit-2.4.0.jar";

/// A dependency updates report as written by the Gradle versions plugin
pub fn updates_report(outdated: &[Outdated], current: &[Current]) -> String {
    let outdated_entries: String = outdated
        .iter()
        .map(|(group, name, version, milestone)| {
            format!(
                r#"
      <outdatedDependency>
        <group>{group}</group>
        <name>{name}</name>
        <version>{version}</version>
        <projectUrl>https://example.com/{name}</projectUrl>
        <available>
          <release/>
          <milestone>{milestone}</milestone>
          <integration/>
        </available>
      </outdatedDependency>"#
            )
        })
        .collect();
    let current_entries: String = current
        .iter()
        .map(|(group, name, version)| {
            format!(
                r#"
      <dependency>
        <group>{group}</group>
        <name>{name}</name>
        <version>{version}</version>
      </dependency>"#
            )
        })
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<response>
  <count>{total}</count>
  <current>
    <count>{current_count}</count>
    <dependencies>{current_entries}
    </dependencies>
  </current>
  <outdated>
    <count>{outdated_count}</count>
    <dependencies>{outdated_entries}
    </dependencies>
  </outdated>
  <exceeded><count>0</count><dependencies/></exceeded>
  <unresolved><count>0</count><dependencies/></unresolved>
</response>
"#,
        total = outdated.len() + current.len(),
        current_count = current.len(),
        outdated_count = outdated.len(),
    )
}

/// An OWASP dependency-check report; each entry is a file path and its vulnerability ids
pub fn vulnerabilities_report(dependencies: &[(&str, &[&str])]) -> String {
    let entries: String = dependencies
        .iter()
        .map(|(path, ids)| {
            let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
            let vulnerabilities: String = ids
                .iter()
                .map(|id| {
                    format!(
                        r#"
          <vulnerability source="NVD">
            <name>{id}</name>
            <severity>HIGH</severity>
            <description>Issue {id}</description>
          </vulnerability>"#
                    )
                })
                .collect();
            format!(
                r#"
    <dependency isVirtual="false">
      <fileName>{file_name}</fileName>
      <filePath>{path}</filePath>
      <md5>0</md5>
      <vulnerabilities>{vulnerabilities}
      </vulnerabilities>
    </dependency>"#
            )
        })
        .collect();

    format!(
        r#"<?xml version="1.0"?>
<analysis xmlns="https://jeremylong.github.io/DependencyCheck/dependency-check.3.0.xsd">
  <scanInfo><engineVersion>9.0.9</engineVersion></scanInfo>
  <projectInfo><name>app</name><reportDate>2024-03-01T10:00:00Z</reportDate></projectInfo>
  <dependencies>{entries}
  </dependencies>
</analysis>
"#
    )
}

pub fn empty_updates_report() -> String {
    updates_report(&[], &[])
}

pub fn empty_vulnerabilities_report() -> String {
    vulnerabilities_report(&[])
}

//! Static CI pipeline configs for running generated tests.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::export::ExportFile;

/// CI providers a pipeline config can be produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CiProvider {
    Github,
    Gitlab,
    Jenkins,
    Azure,
}

impl CiProvider {
    pub const ALL: [CiProvider; 4] = [
        CiProvider::Github,
        CiProvider::Gitlab,
        CiProvider::Jenkins,
        CiProvider::Azure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CiProvider::Github => "github",
            CiProvider::Gitlab => "gitlab",
            CiProvider::Jenkins => "jenkins",
            CiProvider::Azure => "azure",
        }
    }
}

impl fmt::Display for CiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for provider names that are not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown CI provider: {0}")]
pub struct UnknownProvider(pub String);

impl FromStr for CiProvider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        CiProvider::ALL
            .into_iter()
            .find(|p| p.as_str() == lowered)
            .ok_or_else(|| UnknownProvider(s.to_string()))
    }
}

const GITHUB: &str = r#"name: Automated Tests
on:
  push:
    branches: [ main ]
  pull_request:
    branches: [ main ]
jobs:
  test:
    runs-on: ubuntu-latest
    strategy:
      matrix:
        node-version: [16.x, 18.x]
    steps:
    - uses: actions/checkout@v3
    - name: Use Node.js ${{ matrix.node-version }}
      uses: actions/setup-node@v3
      with:
        node-version: ${{ matrix.node-version }}
        cache: 'npm'
    - name: Install dependencies
      run: npm ci
    - name: Run tests
      run: npm test
    - name: Upload coverage
      uses: codecov/codecov-action@v3
      with:
        file: ./coverage/lcov.info
        flags: unittests
        name: codecov-umbrella"#;

const GITLAB: &str = r#"stages:
  - test
  - deploy
test:
  stage: test
  image: node:18
  script:
    - npm ci
    - npm run test:ci
  coverage: '/Lines\s*:\s*(\d+\.\d+)%/'
  artifacts:
    reports:
      coverage_report:
        coverage_format: cobertura
        path: coverage/cobertura-coverage.xml
      junit:
        path: junit.xml
    paths:
      - coverage/
    expire_in: 1 week"#;

const JENKINS: &str = r#"pipeline {
    agent any
    environment {
        NODE_VERSION = '18'
    }
    stages {
        stage('Install Dependencies') {
            steps {
                sh 'npm ci'
            }
        }
        stage('Run Tests') {
            steps {
                sh 'npm test'
            }
            post {
                always {
                    publishHTML([
                        allowMissing: false,
                        alwaysLinkToLastBuild: true,
                        keepAll: true,
                        reportDir: 'coverage',
                        reportFiles: 'index.html',
                        reportName: 'Coverage Report'
                    ])
                    junit 'junit.xml'
                }
            }
        }
    }
    post {
        always {
            cleanWs()
        }
    }
}"#;

const AZURE: &str = r#"trigger:
- main
pool:
  vmImage: ubuntu-latest
variables:
  NODE_VERSION: '18.x'
steps:
- task: NodeTool@0
  inputs:
    versionSpec: $(NODE_VERSION)
  displayName: 'Install Node.js'
- script: |
    npm ci
  displayName: 'npm install'
- script: |
    npm run test:ci
  displayName: 'npm test'
- task: PublishTestResults@2
  inputs:
    testResultsFormat: 'JUnit'
    testResultsFiles: 'junit.xml'
    failTaskOnFailedTests: true
  displayName: 'Publish test results'
- task: PublishCodeCoverageResults@1
  inputs:
    codeCoverageTool: 'Cobertura'
    summaryFileLocation: 'coverage/cobertura-coverage.xml'
    reportDirectory: 'coverage'
  displayName: 'Publish code coverage'"#;

/// Returns the pipeline config text for `provider`.
///
/// Jenkins gets a declarative Jenkinsfile; the others get YAML.
pub fn ci_config(provider: CiProvider) -> &'static str {
    match provider {
        CiProvider::Github => GITHUB,
        CiProvider::Gitlab => GITLAB,
        CiProvider::Jenkins => JENKINS,
        CiProvider::Azure => AZURE,
    }
}

/// Wraps the pipeline config in an export file named `<provider>-ci.yml`.
pub fn ci_export(provider: CiProvider) -> ExportFile {
    ExportFile {
        file_name: format!("{}-ci.yml", provider.as_str()),
        content: ci_config(provider).to_string(),
    }
}

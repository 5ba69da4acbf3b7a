//! Canned response payloads.
//!
//! Everything the mock returns is fixture data: hardcoded payloads that
//! match the real backend's response shapes, so the frontend exercises the
//! same decoding paths it uses in production. Tests deserialize with the
//! same types.

use serde::{Deserialize, Serialize};

/// Installer attributes reported to the frontend at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallerAttrs {
    pub name: String,
    pub recovery: bool,
    pub target_url: String,
}

/// GET /api/attrs payload.
pub fn installer_attrs(recovery: bool) -> InstallerAttrs {
    InstallerAttrs {
        name: "yuzu".to_string(),
        recovery,
        target_url: "https://raw.githubusercontent.com/yuzu-ssbu/yuzu-ssbu-installer/master/config.windows.v1.toml"
            .to_string(),
    }
}

/// Version of an installed package as recorded in the install database.
///
/// Externally tagged so it serializes as `{"Integer":"1"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PackageVersion {
    Integer(String),
}

/// One entry of the install database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstalledPackage {
    pub name: String,
    pub version: PackageVersion,
    pub latest: bool,
    pub files: Vec<String>,
    pub shortcuts: Vec<String>,
}

/// The install database: what is already on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallDatabase {
    pub packages: Vec<InstalledPackage>,
    pub shortcuts: Vec<String>,
}

/// GET /api/installation-status payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallationStatus {
    pub database: InstallDatabase,
    pub install_path: Option<String>,
    pub preexisting_install: bool,
    pub is_launcher: bool,
    pub launcher_path: Option<String>,
}

/// Single-package install database with the maintenance/launcher flags
/// echoed into the status fields. Paths stay null.
pub fn installation_status(preexisting_install: bool, is_launcher: bool) -> InstallationStatus {
    InstallationStatus {
        database: InstallDatabase {
            packages: vec![InstalledPackage {
                name: "Test 1".to_string(),
                version: PackageVersion::Integer("1".to_string()),
                latest: false,
                files: vec![],
                shortcuts: vec![],
            }],
            shortcuts: vec![],
        },
        install_path: None,
        preexisting_install,
        is_launcher,
        launcher_path: None,
    }
}

/// GET /api/default-path payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultPath {
    pub path: String,
}

pub fn default_path() -> DefaultPath {
    DefaultPath {
        path: "/tmp/test/".to_string(),
    }
}

/// One release version of a package.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageVersionInfo {
    pub version: String,
    pub name: String,
}

/// GET /api/package-versions payload: a fixed two-release history.
pub fn package_versions() -> Vec<PackageVersionInfo> {
    vec![
        PackageVersionInfo {
            version: "1".to_string(),
            name: "name1".to_string(),
        },
        PackageVersionInfo {
            version: "2".to_string(),
            name: "name2".to_string(),
        },
    ]
}

/// Where a package's releases come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageSource {
    pub name: String,
    #[serde(rename = "match")]
    pub version_match: String,
    pub allow_version_control: bool,
    pub config: SourceConfig,
}

/// Source-specific settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub repo: String,
}

/// One installable package in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageDescription {
    pub name: String,
    pub description: String,
    pub default: Option<bool>,
    pub source: PackageSource,
    pub shortcuts: Vec<String>,
    pub versions: Vec<String>,
    pub selected_version: Option<String>,
}

/// Full package catalog served by /api/config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallerConfig {
    pub installing_message: String,
    pub new_tool: Option<String>,
    pub packages: Vec<PackageDescription>,
    pub hide_advanced: bool,
}

/// GET /api/config payload.
///
/// Every package pre-selects its second listed version, so the frontend's
/// version picker starts off the newest-but-one release rather than the
/// default.
pub fn installer_config() -> InstallerConfig {
    let mut config = InstallerConfig {
        installing_message:
            "Test Banner <strong>Bold</strong>&nbsp;<pre>Code block</pre>&nbsp;<i>Italic</i>&nbsp;<del>Strike</del>"
                .to_string(),
        new_tool: None,
        packages: vec![
            PackageDescription {
                name: "Test 1".to_string(),
                description: "LiftInstall GUI Test 1".to_string(),
                default: Some(true),
                source: PackageSource {
                    name: "github".to_string(),
                    version_match: "^test$".to_string(),
                    allow_version_control: true,
                    config: SourceConfig {
                        repo: "j-selby/liftinstall".to_string(),
                    },
                },
                shortcuts: vec![],
                versions: vec!["1".to_string(), "2".to_string(), "3".to_string()],
                selected_version: None,
            },
            PackageDescription {
                name: "Test 2".to_string(),
                description: "Different Banner Test Text Lorum Ipsum bla bla bla. \
                              Different Banner Test Text Lorum Ipsum bla bla bla. \
                              Different Banner Test Text Lorum Ipsum bla bla bla. \
                              Different Banner Test Text Lorum Ipsum bla bla bla"
                    .to_string(),
                default: None,
                source: PackageSource {
                    name: "github".to_string(),
                    version_match: "^test2$".to_string(),
                    allow_version_control: false,
                    config: SourceConfig {
                        repo: "j-selby/liftinstall".to_string(),
                    },
                },
                shortcuts: vec![],
                versions: vec!["1".to_string(), "2".to_string()],
                selected_version: None,
            },
        ],
        hide_advanced: false,
    };

    for package in &mut config.packages {
        package.selected_version = package.versions.get(1).cloned();
    }

    config
}

/// Entitlements embedded in the fake auth token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitlementClaims {
    #[serde(rename = "isPatreonAccountLinked")]
    pub is_patreon_account_linked: bool,
    #[serde(rename = "isPatreonSubscriptionActive")]
    pub is_patreon_subscription_active: bool,
    #[serde(rename = "releaseChannels")]
    pub release_channels: Vec<String>,
}

/// POST /api/check-auth payload: always authenticated, full entitlements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub username: String,
    pub token: String,
    pub jwt_token: EntitlementClaims,
}

pub fn authenticated_user() -> AuthenticatedUser {
    AuthenticatedUser {
        username: "test1".to_string(),
        token: "token".to_string(),
        jwt_token: EntitlementClaims {
            is_patreon_account_linked: true,
            is_patreon_subscription_active: true,
            release_channels: vec!["early-access".to_string()],
        },
    }
}

/// POST /api/verify-path payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathVerification {
    pub exists: bool,
}

//! Built-in lab and module data.
//!
//! Stands in for the remote labs API until a backend is wired. Everything here
//! is fixed at compile time; `start_lab` and friends answer with mock status
//! records and never launch a container.

use async_trait::async_trait;
use lab_core::model::{
    Difficulty, InstanceStatus, Lab, LabId, LabInstanceStatus, Module, ModuleId, TrackId,
};

use crate::error::{LabsApiError, ModuleError};
use crate::labs_api::LabsApi;
use crate::module_service::ModuleSource;

const MOCK_MESSAGE: &str = "Lab environments are not available in preview mode.";

#[derive(Clone, Debug)]
pub struct StaticCatalog {
    labs: Vec<Lab>,
    modules: Vec<Module>,
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new(default_labs(), default_modules())
    }
}

impl StaticCatalog {
    #[must_use]
    pub fn new(labs: Vec<Lab>, modules: Vec<Module>) -> Self {
        Self { labs, modules }
    }

    #[must_use]
    pub fn labs(&self) -> &[Lab] {
        &self.labs
    }

    #[must_use]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    fn find_lab(&self, id: LabId) -> Result<&Lab, LabsApiError> {
        self.labs
            .iter()
            .find(|lab| lab.id == id)
            .ok_or(LabsApiError::NotFound(id))
    }
}

#[async_trait]
impl LabsApi for StaticCatalog {
    async fn list_labs(&self) -> Result<Vec<Lab>, LabsApiError> {
        Ok(self.labs.clone())
    }

    async fn get_lab(&self, id: LabId) -> Result<Lab, LabsApiError> {
        self.find_lab(id).cloned()
    }

    async fn start_lab(&self, id: LabId) -> Result<LabInstanceStatus, LabsApiError> {
        let lab = self.find_lab(id)?;
        if lab.is_locked {
            return Err(LabsApiError::Locked(id));
        }
        let mut status = LabInstanceStatus::new(id, InstanceStatus::Stopped);
        status.message = Some(MOCK_MESSAGE.to_owned());
        Ok(status)
    }

    async fn lab_status(&self, id: LabId) -> Result<LabInstanceStatus, LabsApiError> {
        self.find_lab(id)?;
        Ok(LabInstanceStatus::new(id, InstanceStatus::Stopped))
    }

    async fn stop_lab(&self, id: LabId) -> Result<LabInstanceStatus, LabsApiError> {
        self.lab_status(id).await
    }
}

#[async_trait]
impl ModuleSource for StaticCatalog {
    async fn list_modules(&self) -> Result<Vec<Module>, ModuleError> {
        Ok(self.modules.clone())
    }

    async fn get_module(&self, id: ModuleId) -> Result<Module, ModuleError> {
        self.modules
            .iter()
            .find(|module| module.id == id)
            .cloned()
            .ok_or(ModuleError::NotFound(id))
    }
}

// ─── Data ──────────────────────────────────────────────────────────────────────

const WEB_TRACK: TrackId = TrackId::new(1);
const NETWORK_TRACK: TrackId = TrackId::new(2);

#[allow(clippy::too_many_arguments)]
fn lab(
    id: u64,
    track_id: TrackId,
    module_id: u64,
    title: &str,
    description: &str,
    difficulty: Difficulty,
    category: &str,
    estimated_minutes: u32,
    points_awarded: u32,
) -> Lab {
    Lab {
        id: LabId::new(id),
        track_id,
        module_id: ModuleId::new(module_id),
        title: title.to_owned(),
        description: description.to_owned(),
        difficulty,
        category: category.to_owned(),
        estimated_minutes,
        points_awarded,
        is_completed: false,
        is_locked: false,
        lab_type: Some("docker".to_owned()),
        docker_image: None,
    }
}

/// Placeholder labs shown on the dashboard.
#[must_use]
pub fn default_labs() -> Vec<Lab> {
    let mut labs = vec![
        lab(
            1,
            WEB_TRACK,
            1,
            "SQL Injection Basics",
            "Bypass a vulnerable login form and dump the users table.",
            Difficulty::Easy,
            "Web Security",
            30,
            100,
        ),
        lab(
            2,
            WEB_TRACK,
            1,
            "Reflected XSS Hunt",
            "Find and exploit a reflected cross-site scripting flaw in a search page.",
            Difficulty::Medium,
            "Web Security",
            45,
            150,
        ),
        lab(
            3,
            NETWORK_TRACK,
            2,
            "Packet Capture Forensics",
            "Reconstruct an attacker's session from a captured pcap file.",
            Difficulty::Medium,
            "Network Security",
            60,
            200,
        ),
        lab(
            4,
            NETWORK_TRACK,
            2,
            "Pivoting Through a DMZ",
            "Chain two footholds to reach an internal service.",
            Difficulty::Hard,
            "Network Security",
            90,
            300,
        ),
        lab(
            5,
            WEB_TRACK,
            3,
            "Deserialization RCE",
            "Turn an unsafe object deserializer into remote code execution.",
            Difficulty::Extreme,
            "Exploitation",
            120,
            500,
        ),
    ];

    labs[0].is_completed = true;
    labs[0].docker_image = Some("cyberlab/sqli-basics:latest".to_owned());
    labs[1].docker_image = Some("cyberlab/xss-hunt:latest".to_owned());
    labs[4].is_locked = true;
    labs
}

/// Placeholder modules backing the content viewer.
#[must_use]
pub fn default_modules() -> Vec<Module> {
    vec![
        Module {
            id: ModuleId::new(1),
            track_id: WEB_TRACK,
            title: "Web Application Attacks".to_owned(),
            summary: "Injection flaws and client-side attacks against web apps.".to_owned(),
            content: "# Web Application Attacks\n\n\
                Most web vulnerabilities come from **trusting user input**.\n\n\
                ## What you will learn\n\n\
                - How SQL injection changes the meaning of a query\n\
                - Why output encoding stops cross-site scripting\n\
                - How to read a request in an intercepting proxy\n\n\
                > Always test against systems you are authorized to attack.\n\n\
                ```sql\nSELECT * FROM users WHERE name = '' OR '1'='1';\n```\n"
                .to_owned(),
        },
        Module {
            id: ModuleId::new(2),
            track_id: NETWORK_TRACK,
            title: "Network Defense".to_owned(),
            summary: "Traffic analysis, segmentation and lateral movement.".to_owned(),
            content: "# Network Defense\n\n\
                Attackers rarely land where they want to be. They *move*.\n\n\
                1. Capture traffic at the right choke point\n\
                2. Baseline normal behaviour\n\
                3. Alert on what breaks the baseline\n"
                .to_owned(),
        },
        Module {
            id: ModuleId::new(3),
            track_id: WEB_TRACK,
            title: "Exploit Development".to_owned(),
            summary: "From a crash to a working exploit.".to_owned(),
            content: "# Exploit Development\n\n\
                This module unlocks after you finish the web track.\n"
                .to_owned(),
        },
    ]
}

//! The records shown on the page. All of it is compiled in.

use serde_json::{json, Value};

use crate::motion::{Offset, REVEAL_DISTANCE};

/// A whole-number percentage.
///
/// Construction rejects anything above 100. Every rating below is built in a `const`, so a bad
/// literal fails the build instead of rendering an overflowing bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Percent(u8);

impl Percent {
    pub const fn new(value: u8) -> Self {
        assert!(value <= 100, "percentage must lie in [0, 100]");
        Self(value)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub fn width_style(self) -> String {
        format!("width: {}%", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub source_code_url: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certification {
    pub name: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillRating {
    pub name: &'static str,
    pub level: Percent,
}

const fn skill(name: &'static str, level: u8) -> SkillRating {
    SkillRating {
        name,
        level: Percent::new(level),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub entries: &'static [SkillRating],
    /// Side the group's bars slide in from.
    pub enter_from: Offset,
}

pub struct Owner {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub role: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub photo: &'static str,
}

impl Owner {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.phone.replace(' ', ""))
    }

    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub const OWNER: Owner = Owner {
    first_name: "Vishal",
    last_name: "Tinani",
    role: "DevOps Engineer & Backend Developer",
    email: "vishaldeveops@gmail.com",
    phone: "+91 7990953013",
    github: "https://github.com/Tinanivishal",
    linkedin: "https://www.linkedin.com/in/vishal-tinani/",
    photo: "/me.jpg",
};

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "CI/CD Pipeline with Jenkins",
        description: "Automated build and deployment pipeline using Jenkins, GitHub, Docker, Nginx server and Docker Compose",
        image: "/projects/jenkins-pipeline.jpg",
        source_code_url: Some("https://github.com/Tinanivishal/Jenkins-Pipelines.git"),
    },
    Project {
        title: "Node.js App Deployment",
        description: "Deployed a scalable Node.js application on AWS EC2 using Docker and NGINX as reverse proxy.",
        image: "/projects/nodjsproject.jpg",
        source_code_url: None,
    },
    Project {
        title: "Website of scrap Collection",
        description: "Created web site using reactjs as Frontend , nodejs as backend Mongodb as database",
        image: "/projects/image.png",
        source_code_url: Some("https://github.com/Tinanivishal/Scrapters.git"),
    },
    Project {
        title: "Kubernetes Guestbook App",
        description: "Deployed a PHP guestbook app with Redis on Kubernetes using YAML manifests and containerd runtime.",
        image: "/projects/guestbook-k8s.png",
        source_code_url: None,
    },
];

pub const CERTIFICATIONS: [Certification; 4] = [
    Certification {
        name: "CCNA",
        image: "/certificates/ccna.png",
        description: "Cisco Certified Network Associate - Networking fundamentals and routing/switching knowledge.",
    },
    Certification {
        name: "DevOps Certified",
        image: "/certificates/devops.jpg",
        description: "Certified in core DevOps practices including CI/CD, containerization, infrastructure automation.",
    },
    Certification {
        name: "Java Full Stack",
        image: "/certificates/java.png",
        description: "Completed Full Stack Java Developer training with backend and frontend experience.",
    },
    Certification {
        name: "IANT Course",
        image: "/certificates/iant.jpg",
        description: "Completed professional IT training from IANT in networking and system administration.",
    },
];

pub const DEVOPS_SKILLS: [SkillRating; 5] = [
    skill("Docker", 90),
    skill("Kubernetes", 85),
    skill("Jenkins", 80),
    skill("Terraform", 75),
    skill("Ansible", 70),
];

pub const BACKEND_SKILLS: [SkillRating; 5] = [
    skill("Java (Spring Boot)", 85),
    skill("Node.js", 80),
    skill("Python", 75),
    skill("SQL / MySQL", 80),
    skill("MongoDB", 70),
];

pub const SKILL_GROUPS: [SkillGroup; 2] = [
    SkillGroup {
        title: "DevOps Tools",
        entries: &DEVOPS_SKILLS,
        enter_from: Offset::FromLeft(REVEAL_DISTANCE),
    },
    SkillGroup {
        title: "Programming & Backend",
        entries: &BACKEND_SKILLS,
        enter_from: Offset::FromRight(REVEAL_DISTANCE),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Multiline { rows: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: &'static str,
    pub required: bool,
}

pub const CONTACT_FIELDS: [ContactField; 3] = [
    ContactField {
        name: "name",
        label: "Name",
        kind: FieldKind::Text,
        placeholder: "Enter your name",
        required: true,
    },
    ContactField {
        name: "email",
        label: "Email",
        kind: FieldKind::Email,
        placeholder: "Enter your email",
        required: true,
    },
    ContactField {
        name: "message",
        label: "Message",
        kind: FieldKind::Multiline { rows: 5 },
        placeholder: "Type your message",
        required: true,
    },
];

/// schema.org `Person` record embedded in the document head.
pub fn structured_data() -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": OWNER.full_name(),
        "jobTitle": OWNER.role,
        "email": OWNER.mailto_href(),
        "telephone": OWNER.phone,
        "image": OWNER.photo,
        "sameAs": [OWNER.github, OWNER.linkedin],
    })
}

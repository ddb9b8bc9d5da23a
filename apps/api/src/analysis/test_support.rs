//! Shared fixture taxonomy for analysis tests.

use crate::analysis::taxonomy::Taxonomy;

pub const FIXTURE_JSON: &str = r#"{
    "Full Stack Developer": {
        "beginner": ["HTML", "CSS"],
        "compulsory": ["JavaScript"],
        "intermediate": ["React"],
        "advanced": ["System Design"],
        "next_steps": ["Software Architect"]
    },
    "AI and Data Scientist": {
        "beginner": ["Python/Scala", "Statistics"],
        "compulsory": ["SQL"],
        "intermediate": ["Machine Learning"],
        "advanced": ["Deep Learning"],
        "next_steps": ["Head of Data"]
    },
    "AI Engineer": {
        "beginner": ["Python"],
        "compulsory": ["PyTorch/TensorFlow"],
        "intermediate": ["LLMs"],
        "advanced": ["MLOps"]
    },
    "DevOps Engineer": {
        "beginner": ["Linux", "Git"],
        "compulsory": ["Docker"],
        "intermediate": ["Kubernetes"],
        "advanced": ["Terraform"]
    },
    "Backend Developer": {
        "beginner": ["Java"],
        "compulsory": ["SQL", "REST"],
        "intermediate": ["Microservices"],
        "advanced": []
    },
    "Empty Role": {}
}"#;

pub fn fixture_taxonomy() -> Taxonomy {
    Taxonomy::from_json_str(FIXTURE_JSON).expect("fixture taxonomy parses")
}

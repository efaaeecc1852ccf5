//! Profile value types committed to the editing history.
//!
//! A [`Profile`] is the snapshot value an editing host stores in
//! [`History<Profile>`](crate::History): the full set of career data behind
//! a resume. Field names serialize in camelCase to stay wire-compatible
//! with the JSON the hosting application persists and exchanges.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One job entry in the experience section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub id: String,
    pub company: String,
    pub role: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<String>,
}

/// One entry in the education section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: String,
}

/// A free-form user-defined section (e.g., projects or publications).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomSection {
    pub id: String,
    pub title: String,
    pub content: String,
}

/// A reference contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Referee {
    pub id: String,
    pub name: String,
    pub title: String,
    pub company: String,
    pub email: String,
    pub phone: String,
}

/// The complete career profile a user edits.
///
/// Dates are free-form strings ("Jan 2020", "Present"); `skills` is a single
/// comma-separated string, which [`analyze_keywords`](crate::analyze_keywords)
/// splits. `photo` holds a data URL when present and is omitted from JSON
/// when absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub website: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub skills: String,
    pub custom_sections: Vec<CustomSection>,
    pub referees: Vec<Referee>,
}

/// Placeholder avatar used by the sample profile (base64-encoded SVG).
const SAMPLE_PHOTO: &str = "data:image/svg+xml;base64,PHN2ZyB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciIHZpZXdCb3g9IjAgMCAyNCAyNCIgZmlsbD0iI2FkYmVkZCI+PHBhdGggZD0iTTEyIDJDNi40OCAyIDIgNi40OCAyIDEyczQuNDggMTAgMTAgMTAgMTAtNC40OCAxMC0xMC00LjQ4LTEwLTEwLTEwek0xMiA1YzEuNjYgMCAzIDEuMzQgMyAzcy0xLjM0IDMtMyAzLTMtMS4zNC0zLTMgMS4zNC0zIDMtM3ptMCAxMy4yYy0yLjA4IDAtMy45Ni0uODYtNS4zMy0yLjI0LjgxLTEuNDggMy4xOC0yLjQ2IDUuMzMtMi40NnM0LjUyLjk4IDUuMzMgMi40NmMtMS4zNyAxLjM4LTMuMjUgMi4yNC01LjMzIDIuMjR6Ii8+PC9zdmc+";

impl Profile {
    /// A filled-in demonstration profile for "load sample data".
    #[must_use]
    pub fn sample() -> Self {
        Self {
            name: "Alex Doe".to_string(),
            email: "alex.doe@example.com".to_string(),
            phone: "123-456-7890".to_string(),
            linkedin: "linkedin.com/in/alexdoe".to_string(),
            website: "alexdoe.dev".to_string(),
            summary: "Innovative and results-driven Senior Frontend Developer with over 8 years \
                      of experience in creating dynamic, responsive, and user-friendly web \
                      applications. Proficient in React, TypeScript, and modern JavaScript \
                      frameworks. Passionate about performance optimization and building \
                      pixel-perfect user interfaces."
                .to_string(),
            photo: Some(SAMPLE_PHOTO.to_string()),
            experience: vec![
                WorkExperience {
                    id: "exp1".to_string(),
                    company: "Innovatech Solutions".to_string(),
                    role: "Senior Frontend Developer".to_string(),
                    start_date: "Jan 2020".to_string(),
                    end_date: "Present".to_string(),
                    description: "- Led the development of a new client-facing dashboard using \
                                  React and TypeScript, resulting in a 30% increase in user \
                                  engagement.\n- Mentored a team of 4 junior developers, \
                                  fostering a culture of code quality and continuous learning.\n\
                                  - Optimized application performance, reducing initial load \
                                  time by 40% through code splitting and lazy loading techniques."
                        .to_string(),
                    years: Some("4".to_string()),
                },
                WorkExperience {
                    id: "exp2".to_string(),
                    company: "Digital Creations Inc.".to_string(),
                    role: "Frontend Developer".to_string(),
                    start_date: "Jun 2016".to_string(),
                    end_date: "Dec 2019".to_string(),
                    description: "- Developed and maintained responsive websites for various \
                                  clients using HTML, CSS, and JavaScript.\n- Collaborated with \
                                  UI/UX designers to translate wireframes into high-quality, \
                                  functional code.\n- Implemented A/B tests that improved \
                                  conversion rates by 15%."
                        .to_string(),
                    years: Some("3".to_string()),
                },
            ],
            education: vec![Education {
                id: "edu1".to_string(),
                school: "State University".to_string(),
                degree: "B.S. in Computer Science".to_string(),
                start_date: "Aug 2012".to_string(),
                end_date: "May 2016".to_string(),
            }],
            skills: "React, TypeScript, JavaScript (ES6+), Next.js, Redux, GraphQL, Webpack, \
                     Babel, Jest, Cypress, HTML5, CSS3, SASS, Styled-Components, Agile \
                     Methodologies, CI/CD"
                .to_string(),
            custom_sections: vec![CustomSection {
                id: "custom1".to_string(),
                title: "Projects".to_string(),
                content: "<ul><li><strong>Portfolio Website:</strong> A personal portfolio \
                          built with Next.js and deployed on Vercel, showcasing various \
                          projects.</li><li><strong>E-commerce Store UI:</strong> A mock \
                          e-commerce frontend built with Redux Toolkit for state \
                          management.</li></ul>"
                    .to_string(),
            }],
            referees: vec![Referee {
                id: "ref1".to_string(),
                name: "Jane Smith".to_string(),
                title: "Engineering Manager".to_string(),
                company: "Innovatech Solutions".to_string(),
                email: "jane.smith@innovatech.com".to_string(),
                phone: "987-654-3210".to_string(),
            }],
        }
    }

    /// Serialize to the camelCase wire JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a profile from wire JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty_form() {
        let profile = Profile::default();
        assert!(profile.name.is_empty());
        assert!(profile.photo.is_none());
        assert!(profile.experience.is_empty());
        assert!(profile.referees.is_empty());
    }

    #[test]
    fn test_sample_is_populated() {
        let sample = Profile::sample();
        assert_eq!(sample.name, "Alex Doe");
        assert_eq!(sample.experience.len(), 2);
        assert_eq!(sample.experience[0].years.as_deref(), Some("4"));
        assert_eq!(sample.education.len(), 1);
        assert!(sample.photo.is_some());
        assert!(sample.skills.contains("TypeScript"));
    }

    #[test]
    fn test_json_round_trip() {
        let sample = Profile::sample();
        let json = sample.to_json().unwrap();
        let back = Profile::from_json(&json).unwrap();
        assert_eq!(sample, back);
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let json = Profile::sample().to_json().unwrap();
        assert!(json.contains("\"customSections\""));
        assert!(json.contains("\"startDate\""));
        assert!(json.contains("\"endDate\""));
        assert!(!json.contains("\"custom_sections\""));
    }

    #[test]
    fn test_photo_omitted_when_absent() {
        let profile = Profile::default();
        let json = profile.to_json().unwrap();
        assert!(!json.contains("\"photo\""));
    }

    #[test]
    fn test_parses_wire_json_without_optional_fields() {
        let json = r#"{
            "name": "Sam",
            "email": "sam@example.com",
            "phone": "",
            "linkedin": "",
            "website": "",
            "summary": "",
            "experience": [{
                "id": "exp1",
                "company": "Acme",
                "role": "Engineer",
                "startDate": "2021",
                "endDate": "Present",
                "description": "Built things."
            }],
            "education": [],
            "skills": "Rust, SQL",
            "customSections": [],
            "referees": []
        }"#;
        let profile = Profile::from_json(json).unwrap();
        assert_eq!(profile.name, "Sam");
        assert!(profile.photo.is_none());
        assert_eq!(profile.experience[0].company, "Acme");
        assert!(profile.experience[0].years.is_none());
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let err = Profile::from_json("{\"name\":").unwrap_err();
        assert!(err.to_string().contains("parse"));
    }
}

//! Events: what a task is about. An event flagged as a template can be reused to create concrete events

use serde::{Deserialize, Serialize};

use crate::resource::ResourceId;

/// An event, as stored on the server
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    id: ResourceId,
    #[serde(default)]
    is_template: bool,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    location: String,
    /// Ordinal priority (the server uses 1 to 5)
    #[serde(default)]
    priority: i32,
    #[serde(default)]
    category: String,
}

impl Event {
    pub fn id(&self) -> ResourceId    { self.id          }
    pub fn is_template(&self) -> bool { self.is_template }
    pub fn title(&self) -> &str       { &self.title       }
    pub fn description(&self) -> &str { &self.description }
    pub fn location(&self) -> &str    { &self.location    }
    pub fn priority(&self) -> i32     { self.priority    }
    pub fn category(&self) -> &str    { &self.category    }

    /// The payload that would replace this event with its current content
    pub fn to_request(&self) -> EventRequest {
        EventRequest {
            is_template: self.is_template,
            title: self.title.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            priority: self.priority,
            category: self.category.clone(),
        }
    }
}

/// The creatable and updatable fields of an [`Event`]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    pub is_template: bool,
    pub title: String,
    pub description: String,
    pub location: String,
    pub priority: i32,
    pub category: String,
}

impl EventRequest {
    pub fn new<S: ToString>(title: S) -> Self {
        Self {
            title: title.to_string(),
            ..Self::default()
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format() {
        let json = r#"{"id":7,"isTemplate":true,"title":"Gym","description":"leg day","location":"downtown","priority":2,"category":"health"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.id(), 7);
        assert!(event.is_template());
        assert_eq!(event.location(), "downtown");

        let request = serde_json::to_value(event.to_request()).unwrap();
        assert_eq!(request, serde_json::json!({
            "isTemplate": true,
            "title": "Gym",
            "description": "leg day",
            "location": "downtown",
            "priority": 2,
            "category": "health",
        }));
    }
}

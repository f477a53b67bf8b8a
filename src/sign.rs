//! Signs: a signifier mapped to what it stands for, e.g. an abbreviation and its meaning

use serde::{Deserialize, Serialize};

use crate::resource::ResourceId;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sign {
    id: ResourceId,
    signifier: String,
    signified: String,
}

impl Sign {
    pub fn id(&self) -> ResourceId  { self.id         }
    pub fn signifier(&self) -> &str { &self.signifier }
    pub fn signified(&self) -> &str { &self.signified }

    pub fn to_request(&self) -> SignRequest {
        SignRequest::new(&self.signifier, &self.signified)
    }
}

/// The creatable and updatable fields of a [`Sign`]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SignRequest {
    pub signifier: String,
    pub signified: String,
}

impl SignRequest {
    pub fn new<S: ToString, T: ToString>(signifier: S, signified: T) -> Self {
        Self {
            signifier: signifier.to_string(),
            signified: signified.to_string(),
        }
    }
}

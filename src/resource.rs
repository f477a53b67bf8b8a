//! Typed CRUD access to the REST resources
//!
//! Every resource follows the same conventions:
//!
//! | operation | request |
//! |---|---|
//! | create | `POST /{resource}` |
//! | list   | `GET /{resource}` (only for [`Listable`] resources) |
//! | get    | `GET /{resource}/{id}` |
//! | update | `PUT /{resource}/{id}` (full replacement) |
//! | delete | `DELETE /{resource}/{id}` |
//!
//! Errors are passed through from [`HttpClient`] unchanged.

use std::marker::PhantomData;

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;

use crate::client::HttpClient;
use crate::error::ApiError;
use crate::event::{Event, EventRequest};
use crate::sign::{Sign, SignRequest};
use crate::task::{Task, TaskRequest};
use crate::todo::{Todo, TodoRequest};

/// Server-assigned identifier of a record
pub type ResourceId = u64;

/// A kind of record exposed by the API
pub trait Resource {
    /// Path of the collection, relative to the API base (e.g. `/todos`)
    const PATH: &'static str;
    /// What the server sends back
    type Record: DeserializeOwned;
    /// What is sent to create or replace a record
    type Payload: Serialize;
}

/// Resources whose whole collection can be fetched
pub trait Listable: Resource {}

#[derive(Clone, Copy, Debug)]
pub struct Events;
#[derive(Clone, Copy, Debug)]
pub struct Tasks;
#[derive(Clone, Copy, Debug)]
pub struct Todos;
#[derive(Clone, Copy, Debug)]
pub struct Signs;

impl Resource for Events {
    const PATH: &'static str = "/events";
    type Record = Event;
    type Payload = EventRequest;
}
impl Listable for Events {}

impl Resource for Tasks {
    const PATH: &'static str = "/tasks";
    type Record = Task;
    type Payload = TaskRequest;
}
impl Listable for Tasks {}

impl Resource for Todos {
    const PATH: &'static str = "/todos";
    type Record = Todo;
    type Payload = TodoRequest;
}
impl Listable for Todos {}

impl Resource for Signs {
    const PATH: &'static str = "/signs";
    type Record = Sign;
    type Payload = SignRequest;
}


/// CRUD operations on one kind of resource. Get one from [`HttpClient::events`], [`HttpClient::todos`], etc.
#[derive(Debug)]
pub struct ResourceClient<'a, R> {
    http: &'a HttpClient,
    _resource: PhantomData<R>,
}

impl<'a, R> Clone for ResourceClient<'a, R> {
    fn clone(&self) -> Self {
        Self { http: self.http, _resource: PhantomData }
    }
}
impl<'a, R> Copy for ResourceClient<'a, R> {}

impl<'a, R: Resource> ResourceClient<'a, R> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http, _resource: PhantomData }
    }

    /// The endpoint of a single record
    pub fn item_path(id: ResourceId) -> String {
        format!("{}/{}", R::PATH, id)
    }

    /// Create a record, and return it as stored by the server (with its new id)
    pub async fn create(&self, payload: &R::Payload) -> Result<R::Record, ApiError> {
        let created = self.http.post(R::PATH, Some(payload)).await?;
        created.ok_or_else(empty_body)
    }

    /// Fetch a single record
    pub async fn get(&self, id: ResourceId) -> Result<R::Record, ApiError> {
        let record = self.http.get(&Self::item_path(id), &[]).await?;
        record.ok_or_else(empty_body)
    }

    /// Replace a record
    pub async fn update(&self, id: ResourceId, payload: &R::Payload) -> Result<(), ApiError> {
        let _: Option<IgnoredAny> = self.http.put(&Self::item_path(id), Some(payload)).await?;
        Ok(())
    }

    /// Delete a record
    pub async fn delete(&self, id: ResourceId) -> Result<(), ApiError> {
        let _: Option<IgnoredAny> = self.http.delete(&Self::item_path(id)).await?;
        Ok(())
    }
}

impl<'a, R: Listable> ResourceClient<'a, R> {
    /// Fetch every record. A `204 No Content` means there is none
    pub async fn list(&self) -> Result<Vec<R::Record>, ApiError> {
        let records: Option<Vec<R::Record>> = self.http.get(R::PATH, &[]).await?;
        Ok(records.unwrap_or_default())
    }
}

fn empty_body() -> ApiError {
    ApiError::Decode("empty response body".to_string())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_share_the_client() {
        let http = HttpClient::new(crate::config::Settings::default());
        let todos = http.todos();
        let copy = todos;
        let clone = todos.clone();
        assert!(std::ptr::eq(copy.http, clone.http));
        assert!(std::ptr::eq(todos.http, &http));
    }

    #[test]
    fn paths() {
        assert_eq!(ResourceClient::<Events>::item_path(3), "/events/3");
        assert_eq!(ResourceClient::<Tasks>::item_path(10), "/tasks/10");
        assert_eq!(ResourceClient::<Todos>::item_path(1), "/todos/1");
        assert_eq!(ResourceClient::<Signs>::item_path(42), "/signs/42");
    }
}

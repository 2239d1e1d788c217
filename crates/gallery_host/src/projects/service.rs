//! Project-listing API contracts.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use super::types::Project;

/// Object-safe boxed future used by [`ProjectsApi`] async methods.
pub type ProjectsFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Remote API client for category-filtered project listings.
pub trait ProjectsApi {
    /// Lists curator-featured projects starting at `offset`.
    fn featured<'a>(&'a self, offset: u32) -> ProjectsFuture<'a, Result<Vec<Project>, String>>;

    /// Lists the most-loved projects starting at `offset`.
    fn top_loved<'a>(&'a self, offset: u32) -> ProjectsFuture<'a, Result<Vec<Project>, String>>;

    /// Lists trending projects starting at `offset`.
    fn trending<'a>(&'a self, offset: u32) -> ProjectsFuture<'a, Result<Vec<Project>, String>>;

    /// Lists recently shared projects starting at `offset`.
    fn recent<'a>(&'a self, offset: u32) -> ProjectsFuture<'a, Result<Vec<Project>, String>>;

    /// Lists projects tagged with `tag` starting at `offset`.
    fn tagged<'a>(
        &'a self,
        tag: &'a str,
        offset: u32,
    ) -> ProjectsFuture<'a, Result<Vec<Project>, String>>;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// One listing request against a [`ProjectsApi`].
pub enum ProjectQuery {
    /// [`ProjectsApi::featured`].
    Featured,
    /// [`ProjectsApi::top_loved`].
    TopLoved,
    /// [`ProjectsApi::trending`].
    Trending,
    /// [`ProjectsApi::recent`].
    Recent,
    /// [`ProjectsApi::tagged`] with the contained tag.
    Tagged(String),
}

impl ProjectQuery {
    /// Issues this query against `api` starting at `offset`.
    pub fn run<'a, A: ProjectsApi + ?Sized>(
        &'a self,
        api: &'a A,
        offset: u32,
    ) -> ProjectsFuture<'a, Result<Vec<Project>, String>> {
        match self {
            Self::Featured => api.featured(offset),
            Self::TopLoved => api.top_loved(offset),
            Self::Trending => api.trending(offset),
            Self::Recent => api.recent(offset),
            Self::Tagged(tag) => api.tagged(tag, offset),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op API client for unsupported targets; every listing is empty.
pub struct NoopProjectsApi;

impl ProjectsApi for NoopProjectsApi {
    fn featured<'a>(&'a self, _offset: u32) -> ProjectsFuture<'a, Result<Vec<Project>, String>> {
        Box::pin(async { Ok(Vec::new()) })
    }

    fn top_loved<'a>(&'a self, _offset: u32) -> ProjectsFuture<'a, Result<Vec<Project>, String>> {
        Box::pin(async { Ok(Vec::new()) })
    }

    fn trending<'a>(&'a self, _offset: u32) -> ProjectsFuture<'a, Result<Vec<Project>, String>> {
        Box::pin(async { Ok(Vec::new()) })
    }

    fn recent<'a>(&'a self, _offset: u32) -> ProjectsFuture<'a, Result<Vec<Project>, String>> {
        Box::pin(async { Ok(Vec::new()) })
    }

    fn tagged<'a>(
        &'a self,
        _tag: &'a str,
        _offset: u32,
    ) -> ProjectsFuture<'a, Result<Vec<Project>, String>> {
        Box::pin(async { Ok(Vec::new()) })
    }
}

#[derive(Debug, Clone)]
/// In-memory API client that serves one fixed listing and records every request.
pub struct MemoryProjectsApi {
    listing: Rc<RefCell<Result<Vec<Project>, String>>>,
    calls: Rc<RefCell<Vec<(ProjectQuery, u32)>>>,
}

impl MemoryProjectsApi {
    /// Creates a client that answers every query with `projects`.
    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            listing: Rc::new(RefCell::new(Ok(projects))),
            calls: Rc::default(),
        }
    }

    /// Creates a client that rejects every query with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            listing: Rc::new(RefCell::new(Err(message.into()))),
            calls: Rc::default(),
        }
    }

    /// Returns the queries issued so far, in call order.
    pub fn calls(&self) -> Vec<(ProjectQuery, u32)> {
        self.calls.borrow().clone()
    }

    fn answer<'a>(
        &'a self,
        query: ProjectQuery,
        offset: u32,
    ) -> ProjectsFuture<'a, Result<Vec<Project>, String>> {
        Box::pin(async move {
            self.calls.borrow_mut().push((query, offset));
            self.listing.borrow().clone()
        })
    }
}

impl Default for MemoryProjectsApi {
    fn default() -> Self {
        Self::with_projects(Vec::new())
    }
}

impl ProjectsApi for MemoryProjectsApi {
    fn featured<'a>(&'a self, offset: u32) -> ProjectsFuture<'a, Result<Vec<Project>, String>> {
        self.answer(ProjectQuery::Featured, offset)
    }

    fn top_loved<'a>(&'a self, offset: u32) -> ProjectsFuture<'a, Result<Vec<Project>, String>> {
        self.answer(ProjectQuery::TopLoved, offset)
    }

    fn trending<'a>(&'a self, offset: u32) -> ProjectsFuture<'a, Result<Vec<Project>, String>> {
        self.answer(ProjectQuery::Trending, offset)
    }

    fn recent<'a>(&'a self, offset: u32) -> ProjectsFuture<'a, Result<Vec<Project>, String>> {
        self.answer(ProjectQuery::Recent, offset)
    }

    fn tagged<'a>(
        &'a self,
        tag: &'a str,
        offset: u32,
    ) -> ProjectsFuture<'a, Result<Vec<Project>, String>> {
        self.answer(ProjectQuery::Tagged(tag.to_string()), offset)
    }
}

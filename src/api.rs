use crate::{
    config::ApiConfig,
    data::{
        Page,
        mark::{Mark, MarkFields, MarkId, NewMark},
        student::{Student, StudentFields, StudentId},
    },
    error::{BuildClientSnafu, DecodeResponseSnafu, RejectedSnafu, RosterResult, SendRequestSnafu},
};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, de::DeserializeOwned};
use snafu::ResultExt;
use std::fmt::Debug;

#[cfg(test)]
pub mod fake;

static USER_AGENT: &str = concat!("roster/", env!("CARGO_PKG_VERSION"));

/// Everything the controllers need from the remote API. Mutations only care whether the
/// call worked, so their response bodies are never decoded.
#[async_trait]
pub trait RosterApi: Debug + Send + Sync {
    async fn list_students(&self, page: u64, limit: u64) -> RosterResult<Page<Student>>;
    async fn create_student(&self, fields: &StudentFields) -> RosterResult<()>;
    async fn update_student(&self, id: StudentId, fields: &StudentFields) -> RosterResult<()>;
    async fn delete_student(&self, id: StudentId) -> RosterResult<()>;

    async fn list_marks(
        &self,
        student: StudentId,
        page: u64,
        limit: u64,
    ) -> RosterResult<Page<Mark>>;
    async fn create_mark(&self, student: StudentId, fields: &MarkFields) -> RosterResult<()>;
    async fn update_mark(&self, id: MarkId, fields: &MarkFields) -> RosterResult<()>;
    async fn delete_mark(&self, id: MarkId) -> RosterResult<()>;
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Clone, Debug)]
pub struct HttpApi {
    base: String,
    cli: Client,
}

impl HttpApi {
    pub fn new(config: &ApiConfig) -> RosterResult<Self> {
        let cli = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()
            .context(BuildClientSnafu)?;

        Ok(Self {
            base: config.base_url().as_str().to_string(),
            cli,
        })
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn send(
        &self,
        method: &'static str,
        path: &str,
        request: RequestBuilder,
    ) -> RosterResult<Response> {
        let response = request
            .send()
            .await
            .context(SendRequestSnafu { method, path })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        //the body is only a nicety - plenty of failures won't have one
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error);
        RejectedSnafu { status, message }.fail()
    }

    async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        page: u64,
        limit: u64,
    ) -> RosterResult<Page<T>> {
        let request = self
            .cli
            .get(self.url(path))
            .query(&[("page", page), ("limit", limit)]);

        self.send("GET", path, request)
            .await?
            .json()
            .await
            .context(DecodeResponseSnafu { path })
    }
}

#[async_trait]
impl RosterApi for HttpApi {
    async fn list_students(&self, page: u64, limit: u64) -> RosterResult<Page<Student>> {
        self.get_page("/students", page, limit).await
    }

    async fn create_student(&self, fields: &StudentFields) -> RosterResult<()> {
        let path = "/students";
        self.send("POST", path, self.cli.post(self.url(path)).json(fields))
            .await?;
        Ok(())
    }

    async fn update_student(&self, id: StudentId, fields: &StudentFields) -> RosterResult<()> {
        let path = format!("/students/{id}");
        self.send("PUT", &path, self.cli.put(self.url(&path)).json(fields))
            .await?;
        Ok(())
    }

    async fn delete_student(&self, id: StudentId) -> RosterResult<()> {
        let path = format!("/students/{id}");
        self.send("DELETE", &path, self.cli.delete(self.url(&path)))
            .await?;
        Ok(())
    }

    async fn list_marks(
        &self,
        student: StudentId,
        page: u64,
        limit: u64,
    ) -> RosterResult<Page<Mark>> {
        self.get_page(&format!("/students/{student}/marks"), page, limit)
            .await
    }

    async fn create_mark(&self, student: StudentId, fields: &MarkFields) -> RosterResult<()> {
        let path = "/marks";
        let body = NewMark {
            student_id: student,
            fields,
        };
        self.send("POST", path, self.cli.post(self.url(path)).json(&body))
            .await?;
        Ok(())
    }

    async fn update_mark(&self, id: MarkId, fields: &MarkFields) -> RosterResult<()> {
        let path = format!("/marks/{id}");
        self.send("PUT", &path, self.cli.put(self.url(&path)).json(fields))
            .await?;
        Ok(())
    }

    async fn delete_mark(&self, id: MarkId) -> RosterResult<()> {
        let path = format!("/marks/{id}");
        self.send("DELETE", &path, self.cli.delete(self.url(&path)))
            .await?;
        Ok(())
    }
}

//! Submission Coordinator: the submit-and-process state machine.
//!
//! One submission runs `Idle -> Submitting -> Settled -> Idle`. Entering
//! `Submitting` reveals the loading region and starts the dot animation;
//! settlement stops the animation, hides the loading and filename regions,
//! renders the outcome and reveals the result region. Success and failure
//! funnel through the same settlement routine, so no state leaks on either
//! path.

use bytes::Bytes;
use common::payloads::ProcessResponse;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::animation::DotAnimation;
use crate::error::{body_excerpt, RequestError};
use crate::ui::{Cell, Link, Page, ResultContent};

/// Form field the server reads the upload from.
const VIDEO_FIELD: &str = "video";

pub const SUCCESS_LEAD: &str = "Video processed successfully! ";
pub const SUCCESS_LINK_LABEL: &str = "View Shortened Video";

/// What to do with a submission that arrives while another is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlapPolicy {
    /// Reject the new submission without touching the page.
    #[default]
    Reject,
    /// Let it through. This matches the original page, which had no guard;
    /// settlements may then interleave out of order and each submission runs
    /// its own animation.
    Allow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Settled,
}

/// One upload about to be submitted: the file plus any extra form fields.
#[derive(Clone, Debug)]
pub struct ProcessingRequest {
    pub file_name: String,
    pub file_bytes: Bytes,
    pub fields: Vec<(String, String)>,
}

impl ProcessingRequest {
    pub fn new(file_name: impl Into<String>, file_bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            file_bytes: file_bytes.into(),
            fields: Vec::new(),
        }
    }

    fn into_form(self) -> Form {
        let part = Part::bytes(self.file_bytes.to_vec()).file_name(self.file_name);
        let mut form = Form::new().part(VIDEO_FIELD, part);
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        form
    }
}

/// The settled outcome of one submission; mirrors what was rendered into the
/// result region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProcessingResult {
    Success { trailer_url: String },
    Failure { message: String },
}

#[derive(Clone, Debug)]
pub struct SubmissionCoordinator {
    client: Client,
    endpoint: Url,
    page: Page,
    policy: OverlapPolicy,
    state: Cell<SubmissionState>,
}

impl SubmissionCoordinator {
    pub fn new(client: Client, base_url: &Url, page: Page, policy: OverlapPolicy) -> Self {
        // joining a plain path onto an http(s) base cannot fail
        let endpoint = base_url.join("process_video").unwrap();
        Self {
            client,
            endpoint,
            page,
            policy,
            state: Cell::new(SubmissionState::Idle),
        }
    }

    /// Observable state of the machine.
    pub fn state(&self) -> Cell<SubmissionState> {
        self.state.clone()
    }

    /// Runs one submission to settlement. Errs only when the overlap policy
    /// rejects it; every other failure settles into the page as a rendered
    /// failure, exactly like a success does.
    pub async fn submit(
        &self,
        request: ProcessingRequest,
    ) -> Result<ProcessingResult, RequestError> {
        if self.policy == OverlapPolicy::Reject
            && self.state.get() != SubmissionState::Idle
        {
            return Err(RequestError::SubmissionInFlight);
        }
        self.state.set(SubmissionState::Submitting);
        self.page.loading.show();
        let animation = DotAnimation::start(self.page.loading.content());

        let outcome = match self.request_processing(request).await {
            Ok(ProcessResponse::Failed { error }) => ProcessingResult::Failure { message: error },
            Ok(ProcessResponse::Processed { trailer_url }) => {
                ProcessingResult::Success { trailer_url }
            }
            Err(e) => ProcessingResult::Failure {
                message: e.to_string(),
            },
        };

        self.settle(animation, &outcome).await;
        Ok(outcome)
    }

    /// The one settlement routine, shared by the success and failure paths.
    async fn settle(&self, animation: DotAnimation, outcome: &ProcessingResult) {
        self.state.set(SubmissionState::Settled);
        animation.stop().await;
        self.page.loading.hide();
        self.page.file_name.hide();
        match outcome {
            ProcessingResult::Failure { message } => {
                log::debug!("submission settled with failure: {message}");
                self.page
                    .result
                    .set(ResultContent::Text(format!("Error: {message}")));
            }
            ProcessingResult::Success { trailer_url } => {
                log::debug!("submission settled with trailer at {trailer_url}");
                self.page.result.set(ResultContent::Markup {
                    lead: SUCCESS_LEAD.to_string(),
                    link: Link::new_tab(SUCCESS_LINK_LABEL, trailer_url.clone()),
                });
            }
        }
        self.page.result.show();
        self.state.set(SubmissionState::Idle);
    }

    async fn request_processing(
        &self,
        request: ProcessingRequest,
    ) -> Result<ProcessResponse, RequestError> {
        let res = self
            .client
            .post(self.endpoint.clone())
            .multipart(request.into_form())
            .send()
            .await?;
        // the server signals failure in-body; the status code carries
        // nothing the body doesn't
        let text = res.text().await?;
        let value: Value = serde_json::from_str(&text)?;
        serde_json::from_value(value)
            .map_err(|_| RequestError::MalformedResponse(body_excerpt(&text)))
    }
}

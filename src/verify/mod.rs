//! Post-deploy verification: discoverability retry loop plus HTTP smoke
//! check.

pub mod classifier;
pub mod flow;
pub mod http;

pub use classifier::{classify, AttemptOutcome, FlowState, RetryDecision};
pub use flow::{DeploymentTarget, VerificationFlow, VerifyReport};
pub use http::{HttpClient, ReqwestClient, RequestSpec};

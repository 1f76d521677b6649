use biometrics::{Collector, Counter, Moments};

pub(crate) static CLIENT_REQUESTS: Counter = Counter::new("bizchat.client.requests");
pub(crate) static CLIENT_REQUEST_ERRORS: Counter = Counter::new("bizchat.client.request_errors");
pub(crate) static CLIENT_REQUEST_DURATION: Moments =
    Moments::new("bizchat.client.request_duration_seconds");
pub(crate) static CLIENT_HEALTH_CHECKS: Counter = Counter::new("bizchat.client.health_checks");

pub(crate) static SESSION_SUBMISSIONS: Counter = Counter::new("bizchat.session.submissions");
pub(crate) static SESSION_FALLBACKS: Counter = Counter::new("bizchat.session.fallbacks");
pub(crate) static SESSION_IGNORED: Counter = Counter::new("bizchat.session.ignored");
pub(crate) static SESSION_REJECTED_BUSY: Counter = Counter::new("bizchat.session.rejected_busy");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&CLIENT_REQUESTS);
    collector.register_counter(&CLIENT_REQUEST_ERRORS);
    collector.register_moments(&CLIENT_REQUEST_DURATION);
    collector.register_counter(&CLIENT_HEALTH_CHECKS);

    collector.register_counter(&SESSION_SUBMISSIONS);
    collector.register_counter(&SESSION_FALLBACKS);
    collector.register_counter(&SESSION_IGNORED);
    collector.register_counter(&SESSION_REJECTED_BUSY);
}

use super::*;

#[test]
fn submission_errors_keep_their_failure_kind() {
    let rejected = UiError::from_submission(&SubmissionError::rejected(500, "bad input"));
    assert_eq!(rejected.category(), UiErrorCategory::Rejected);
    assert_eq!(rejected.context(), UiErrorContext::ContactSubmission);
    assert!(rejected.message().contains("bad input"));

    let transport = UiError::from_submission(&SubmissionError::transport("connection refused"));
    assert_eq!(transport.category(), UiErrorCategory::Transport);
}

#[test]
fn runtime_startup_failure_is_a_transport_error() {
    let err = UiError::from_message(
        UiErrorContext::BackendStartup,
        "backend worker startup failure: failed to build runtime: too many open files",
    );
    assert_eq!(err.category(), UiErrorCategory::Transport);
    assert_eq!(err.context(), UiErrorContext::BackendStartup);
}

#[test]
fn unrecognized_messages_fall_back_to_unknown() {
    let err = UiError::from_message(UiErrorContext::AssetLoading, "something odd happened");
    assert_eq!(err.category(), UiErrorCategory::Unknown);
    assert_eq!(category_label(err.category()), "Unexpected");
}

#[test]
fn missing_assets_are_a_configuration_problem() {
    let err = UiError::from_message(
        UiErrorContext::AssetLoading,
        "missing asset directory public; project artwork will be blank",
    );
    assert_eq!(err.category(), UiErrorCategory::Configuration);
    assert_eq!(category_label(err.category()), "Configuration");
    assert_eq!(err.context(), UiErrorContext::AssetLoading);
}

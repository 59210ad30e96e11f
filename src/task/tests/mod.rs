mod label_attachment_tests;
mod participant_tests;
mod reconciliation_tests;
mod service_tests;

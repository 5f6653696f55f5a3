//! Mail module - SMTP delivery of verification codes.

pub mod smtp_mailer;

pub use smtp_mailer::SmtpMailer;

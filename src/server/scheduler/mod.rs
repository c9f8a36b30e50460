pub mod suspicious_bots;

pub mod iso8601;

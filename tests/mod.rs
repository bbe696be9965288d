mod analysis_runner;
mod api_server;

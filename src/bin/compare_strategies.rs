use mbti_predict::prediction::{strategies, PredictionError, PredictionResult};
use mbti_predict::utils::{
    load_request, log_comparison_header, log_comparison_row, log_input_error,
};
use std::env;
use std::process;

fn print_usage() {
    eprintln!("Usage: compare-strategies <request.json|->");
    eprintln!();
    eprintln!("Runs every registered strategy on the same genetic and environmental profiles.");
}

fn main() {
    dotenvy::dotenv().ok();

    let args: Vec<String> = env::args().skip(1).collect();
    let [source] = args.as_slice() else {
        print_usage();
        process::exit(1);
    };

    let request = match load_request(source) {
        Ok(request) => request,
        Err(e) => {
            log_input_error(source, &e);
            process::exit(1);
        }
    };

    let all: Vec<_> = strategies().collect();
    log_comparison_header(source, all.len());

    for (i, strategy) in all.iter().enumerate() {
        let outcome: Result<PredictionResult, PredictionError> = strategy
            .predict(&request.genetic, &request.environment)
            .map_err(Into::into);
        log_comparison_row(strategy.name(), &outcome, i + 1 == all.len());
    }
}

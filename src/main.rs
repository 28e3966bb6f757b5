use anyhow::Result;
use mbti_predict::prediction::predict;
use mbti_predict::settings::{settings, settings_problems};
use mbti_predict::utils::{
    load_request, log_init, log_input_error, log_prediction_error, resolve_strategy,
    PredictionAssessment, STRATEGY_ENV_VAR,
};
use std::env;
use std::process;
use tracing::subscriber::set_global_default;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn print_usage() {
    eprintln!("Usage: mbti-predict <request.json|-> [--strategy|-s NAME] [--json]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <request>   JSON file with `genetic` and `environment` profiles, or - for stdin");
    eprintln!("  --strategy  Strategy name (default from settings or MBTI_STRATEGY)");
    eprintln!("  --json      Print the prediction result as JSON");
}

struct Args {
    source: String,
    strategy: Option<String>,
    json: bool,
}

fn parse_args() -> Option<Args> {
    let mut args = env::args().skip(1);
    let mut source = None;
    let mut strategy = None;
    let mut json = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--strategy" | "-s" => strategy = Some(args.next()?),
            "--json" => json = true,
            _ if source.is_none() => source = Some(arg),
            _ => return None,
        }
    }

    Some(Args {
        source: source?,
        strategy,
        json,
    })
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let s = settings();

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(s.logging.directive.parse()?))
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        );
    set_global_default(subscriber)?;

    for problem in settings_problems() {
        tracing::warn!("{problem}");
    }

    let Some(args) = parse_args() else {
        print_usage();
        process::exit(1);
    };

    let request = match load_request(&args.source) {
        Ok(request) => request,
        Err(e) => {
            log_input_error(&args.source, &e);
            process::exit(1);
        }
    };

    let strategy = resolve_strategy(
        args.strategy.as_deref(),
        &request,
        env::var(STRATEGY_ENV_VAR).ok(),
        &s.prediction.default_strategy,
    );

    let outcome = predict(&strategy, &request.genetic, &request.environment);

    if args.json || s.report.json {
        match &outcome {
            Ok(result) => println!("{}", serde_json::to_string_pretty(result)?),
            Err(e) => {
                log_prediction_error(&strategy, e);
                process::exit(2);
            }
        }
        return Ok(());
    }

    log_init(&args.source, &strategy);

    let mut assessment = PredictionAssessment::new(&args.source, &strategy);
    assessment.set_profiles(&request.genetic, &request.environment);
    assessment.set_outcome(outcome);
    assessment.print(&s.report);

    if !assessment.succeeded() {
        process::exit(2);
    }

    Ok(())
}

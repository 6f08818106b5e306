//! app-init's entry point.
//! Parses arguments, loads the manifest defaults and runs the initializer.

use app_init::{
    cli::{get_args, Args},
    config::{load_defaults, Defaults},
    error::{default_error_handler, Result},
    init::{InitContext, Initializer},
    logger::init_logger,
    package_manager::ProcessRunner,
    report::Completion,
    template::resolve_template_dir,
};

/// Main application entry point.
#[tokio::main]
async fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args).await {
        default_error_handler(err);
    }
}

async fn run(args: Args) -> Result<()> {
    let defaults = match &args.defaults {
        Some(path) => load_defaults(path)?,
        None => Defaults::default(),
    };
    let template_dir = resolve_template_dir(&args.app_path, args.template);
    let runner = ProcessRunner::new();

    let ctx = InitContext::new(args.app_path, args.app_name, args.verbose);
    let initializer = Initializer::new(&defaults, &template_dir, &runner);

    if let Completion::InstallFailed { code } = initializer.run(&ctx).await? {
        log::debug!("Install failed with exit code {:?}", code);
    }
    Ok(())
}

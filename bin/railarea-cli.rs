use std::io::{self, Write};
use std::path::{Path, PathBuf};

use railarea::client::{CliArgs, OutputFormatter};
use railarea::commands::{CommandRegistry, RailContext};
use railarea::config::{LoggingConfig, RailAreaConfig, RailsConfig};
use railarea::storage::StationStorage;
use railarea::Result;
use tracing::{info, Level};

fn main() -> Result<()> {
    let args = CliArgs::parse_args();

    // 验证参数
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // 生成默认配置文件
    if args.generate_config {
        let config = RailAreaConfig::default();
        config.save_to_file(&args.config)?;
        println!("✅ Generated default configuration: {}", args.config);
        println!("📝 Edit world sizes and the rails file path, then run again.");
        return Ok(());
    }

    // 加载配置
    let mut config = RailAreaConfig::from_file(&args.config)?;

    // 命令行参数覆盖配置文件
    if let Some(log_level) = &args.log_level {
        config.logging.level = log_level.clone();
    }

    // 验证配置
    config.validate()?;

    // 初始化日志系统
    init_logging(&config.logging)?;

    info!("🚉 Starting railarea-cli {}", env!("CARGO_PKG_VERSION"));

    let rails_path = match &args.rails {
        Some(rails) => PathBuf::from(rails),
        None => config.rails_path(Path::new(&args.config)),
    };
    info!("📖 Loading rails data from {}", rails_path.display());
    let rails = RailsConfig::load(&rails_path)?;
    let storage = StationStorage::from_config(&rails)?;

    let mut registry = CommandRegistry::new(RailContext::new(config, storage));

    if args.should_run_interactive() {
        run_interactive_mode(&mut registry)?;
    } else {
        run_command_mode(&mut registry, &args.command);
    }

    Ok(())
}

fn run_command_mode(registry: &mut CommandRegistry, command: &[String]) {
    let Some((name, rest)) = command.split_first() else {
        return;
    };
    let reply = registry.execute(name, rest);
    println!("{}", OutputFormatter::format_reply(&reply));
    if reply.is_error() {
        std::process::exit(1);
    }
}

fn run_interactive_mode(registry: &mut CommandRegistry) -> Result<()> {
    println!("railarea-cli interactive mode");
    {
        let context = registry.context();
        println!(
            "{}",
            OutputFormatter::format_loaded_message(
                context.storage.areas().count(),
                context.detector.worlds().len()
            )
        );
        if context.config.logging.level == "debug" || context.config.logging.level == "trace" {
            context.config.print_summary();
        }
    }
    println!("Type 'HELP' for available commands, 'QUIT' to exit.");
    println!();

    // 创建标准输入读取器
    let stdin = io::stdin();

    loop {
        // 显示提示符
        let prompt = OutputFormatter::format_prompt(&registry.context().detector.worlds());
        print!("{}", prompt);
        io::stdout().flush()?;

        // 读取用户输入
        let mut input = String::new();
        match stdin.read_line(&mut input) {
            Ok(0) => {
                // EOF (Ctrl+D)
                println!();
                break;
            }
            Ok(_) => {
                let input = input.trim();
                if input.is_empty() {
                    continue;
                }

                if matches!(input.to_uppercase().as_str(), "QUIT" | "EXIT") {
                    break;
                }

                if let Some(reply) = registry.execute_line(input) {
                    println!("{}", OutputFormatter::format_reply(&reply));
                }
            }
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }
    }

    println!("{}", OutputFormatter::format_goodbye_message());
    Ok(())
}

/// 初始化日志系统
fn init_logging(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = match config.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    match (config.output.as_str(), &config.log_file) {
        ("file", Some(log_file)) => {
            // 确保日志目录存在
            if let Some(parent) = log_file.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)?;

            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(file)
                        .with_ansi(false)
                        .with_target(false),
                )
                .with(tracing_subscriber::filter::LevelFilter::from_level(filter))
                .init();
        }
        _ => {
            // 日志写到 stderr，避免与命令输出混在一起
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(io::stderr)
                        .with_target(false),
                )
                .with(tracing_subscriber::filter::LevelFilter::from_level(filter))
                .init();
        }
    }
    Ok(())
}

use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = fitpick_api::Args::parse();
	fitpick_api::run(args).await
}

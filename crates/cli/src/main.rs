use nu_ansi_term::Color;

fn main() {
    if let Err(e) = testscope_cli::run() {
        eprintln!("{} {}", Color::Red.bold().paint("error:"), e);
        std::process::exit(1);
    }
}

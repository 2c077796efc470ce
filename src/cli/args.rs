use clap::Parser;
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "tomo")]
#[command(about = "A Pomodoro timer for the terminal")]
#[command(long_about = "tomo - A Pomodoro timer for the terminal

Runs work and break periods in a loop: a work phase, a short break, and
again, until the configured number of cycles is done and a long break wraps
up the session. Each phase counts down on screen; phase changes fire a
desktop notification.

With no flags, a menu asks for the work and rest lengths first. Pass both
--work and --short-break to skip the menu.

QUICK START:
  tomo                          Pick durations from the menu
  tomo -w 25m -b 5m             25 minute work, 5 minute breaks, no menu
  tomo -w 50m -b 10m -c 2       Two cycles of 50/10

KEYS:
  p or space    Pause / resume
  q, Esc, ^C    Quit

Long break length and cycle count default from ~/.tomo/config.yaml.")]
#[command(version)]
pub struct Cli {
    /// Work period length (e.g. "25m", "1h30m", "90s")
    ///
    /// Combined with --short-break this skips the selection menu.
    #[arg(short, long, value_name = "DURATION")]
    pub work: Option<String>,

    /// Short break length (e.g. "5m")
    ///
    /// Combined with --work this skips the selection menu.
    #[arg(short = 'b', long, value_name = "DURATION")]
    pub short_break: Option<String>,

    /// Long break length, taken after the final work period
    ///
    /// Defaults to the config file value (15m out of the box).
    #[arg(short, long, value_name = "DURATION")]
    pub long_break: Option<String>,

    /// Number of work/short-break cycles before the long break
    #[arg(short, long, value_name = "N")]
    pub cycles: Option<u32>,

    /// Silence the notification sound
    #[arg(long)]
    pub no_sound: bool,

    /// Disable desktop notifications entirely
    #[arg(long)]
    pub no_notify: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

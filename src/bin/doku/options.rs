use anyhow::Result;
use clap::ArgMatches;

#[derive(Clone)]
pub(crate) struct Options {
    source: Source,
    solve: bool,
    hint: bool,
    candidates: bool,
    count_solutions: bool,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        Ok(Self {
            source: if let Some(text) = matches.value_of("puzzle") {
                Source::Puzzle(text.to_string())
            } else {
                Source::Generate {
                    count: matches
                        .value_of("count")
                        .map_or(1, |s| s.parse::<u32>().expect("invalid count")),
                }
            },
            solve: matches.is_present("solve"),
            hint: matches.is_present("hint"),
            candidates: matches.is_present("candidates"),
            count_solutions: matches.is_present("count_solutions"),
        })
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn solve(&self) -> bool {
        self.solve
    }

    pub fn hint(&self) -> bool {
        self.hint
    }

    pub fn candidates(&self) -> bool {
        self.candidates
    }

    pub fn count_solutions(&self) -> bool {
        self.count_solutions
    }
}

#[derive(Clone)]
pub(crate) enum Source {
    Puzzle(String),
    Generate { count: u32 },
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, AppSettings, Arg, ArgGroup};

    App::new("Doku")
        .about("Generate and solve Sudoku puzzles")
        .setting(AppSettings::ArgRequiredElseHelp)
        .group(
            ArgGroup::with_name("source")
                .args(&["generate", "puzzle"])
                .required(true),
        )
        .arg(
            Arg::with_name("generate")
                .short("g")
                .long("generate")
                .help("generate Sudoku puzzle(s)")
                .display_order(1),
        )
        .arg(
            Arg::with_name("puzzle")
                .short("p")
                .long("puzzle")
                .takes_value(true)
                .value_name("GRID")
                .help("read a puzzle from its 81-character encoding")
                .display_order(1),
        )
        .arg(
            Arg::with_name("count")
                .short("c")
                .long("count")
                .requires("generate")
                .takes_value(true)
                .help("the number of puzzles to generate"),
        )
        .arg(
            Arg::with_name("solve")
                .short("s")
                .long("solve")
                .help("solve the puzzle(s)"),
        )
        .arg(
            Arg::with_name("hint")
                .long("hint")
                .requires("puzzle")
                .help("reveal one cell from the solution"),
        )
        .arg(
            Arg::with_name("candidates")
                .long("candidates")
                .requires("puzzle")
                .help("print the candidate values of every cell"),
        )
        .arg(
            Arg::with_name("count_solutions")
                .long("count-solutions")
                .requires("puzzle")
                .help("report whether the puzzle has zero, one, or multiple solutions"),
        )
}

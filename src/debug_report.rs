use rulegram::{
    PatternDiagnostic, RuleDestination, RuleProps, SplitResultVerbose, regex,
};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RED: &str = "\x1b[31m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(
    grammar_name: &str,
    res: &SplitResultVerbose,
    diagnostics: &[PatternDiagnostic],
    color: bool,
) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Splitting: {grammar_name}"), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Input rules ━━━", ansi::GRAY));
    print_profiles(res, &palette);

    println!("\n{}", palette.paint("━━━ Generated tokens ━━━", ansi::GRAY));
    print_tokens(res, &palette);

    if !diagnostics.is_empty() {
        println!("\n{}", palette.paint("━━━ Pattern diagnostics ━━━", ansi::GRAY));
        for diag in diagnostics {
            println!(
                "  {} {} {}",
                palette.paint(&diag.rule_name, ansi::CYAN),
                palette.paint(format!("/{}/", diag.source), ansi::RED),
                palette.dim(diag.message.lines().next().unwrap_or("")),
            );
        }
    }

    println!("\n{}", palette.paint("━━━ Output ━━━", ansi::GRAY));
    print_output(res, &palette);

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    let metrics = &res.details.metrics;
    println!(
        "  Total: {}  │  Rules pass: {}  │  Aux pass: {}",
        palette.paint(format!("{:?}", metrics.total), ansi::GREEN),
        palette.paint(format!("{:?}", metrics.rules_pass.duration), ansi::CYAN),
        palette.dim(format!("{:?}", metrics.aux_pass.duration)),
    );
    println!();
}

fn print_profiles(res: &SplitResultVerbose, palette: &ansi::Palette) {
    for profile in &res.details.rule_profiles {
        let destination = match profile.destination {
            RuleDestination::Lexical => palette.paint("lexical  ", ansi::YELLOW),
            RuleDestination::Syntactic => palette.paint("syntactic", ansi::BLUE),
        };
        println!(
            "  {} {}{}  {}",
            destination,
            palette.bold(&profile.name),
            if profile.auxiliary { palette.dim(" (aux)") } else { String::new() },
            palette.dim(props_summary(profile.props)),
        );
    }
}

fn print_tokens(res: &SplitResultVerbose, palette: &ansi::Palette) {
    if res.details.generated_tokens.is_empty() {
        println!("{}", palette.dim("  No tokens extracted (all terminals were whole rules)"));
        return;
    }

    for token in &res.details.generated_tokens {
        println!(
            "  {} {} {}",
            palette.paint(&token.name, ansi::GREEN),
            palette.dim("<-"),
            palette.paint(&token.preview, ansi::YELLOW),
        );
    }

    let hits = res.details.metrics.intern_hits;
    if hits > 0 {
        println!("  {}", palette.dim(format!("({hits} duplicate occurrences shared)")));
    }
}

fn print_output(res: &SplitResultVerbose, palette: &ansi::Palette) {
    println!(
        "  Syntactic: start={}  {} rules, {} aux",
        palette.paint(&res.syntactic.start_rule_name, ansi::CYAN),
        palette.bold(res.syntactic.rules.len().to_string()),
        res.syntactic.aux_rules.len(),
    );
    for (name, rule) in res.syntactic.rules.iter().chain(res.syntactic.aux_rules.iter()) {
        println!("    {} {} {}", palette.paint(name, ansi::BLUE), palette.dim("="), rule);
    }

    println!(
        "  Lexical: {} rules, {} aux",
        palette.bold(res.lexical.rules.len().to_string()),
        res.lexical.aux_rules.len(),
    );
    for (name, rule) in res.lexical.rules.iter().chain(res.lexical.aux_rules.iter()) {
        let painted = if regex!("^token[0-9]+$").is_match(name) {
            palette.paint(name, ansi::GREEN)
        } else {
            palette.paint(name, ansi::YELLOW)
        };
        println!("    {} {} {}", painted, palette.dim("="), rule);
    }
}

fn props_summary(props: RuleProps) -> String {
    let mut parts = Vec::new();
    if props.contains(RuleProps::HAS_LITERAL) {
        parts.push("lit");
    }
    if props.contains(RuleProps::HAS_PATTERN) {
        parts.push("pat");
    }
    if props.contains(RuleProps::HAS_SYMBOL) {
        parts.push("sym");
    }
    if props.contains(RuleProps::HAS_REPEAT) {
        parts.push("rep");
    }
    if props.contains(RuleProps::HAS_BLANK) {
        parts.push("blank");
    }
    if parts.is_empty() { "empty".to_string() } else { parts.join("+") }
}

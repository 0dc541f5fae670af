use crate::prd::GeneratedPrd;
use terminal_size::{terminal_size, Width};

// ANSI color codes
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const RED: &str = "\x1b[31m";
pub const GRAY: &str = "\x1b[90m";

const DEFAULT_TERMINAL_WIDTH: usize = 80;
const MIN_BANNER_WIDTH: usize = 20;
const MAX_BANNER_WIDTH: usize = 80;

/// Color options for section banners
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BannerColor {
    /// Cyan - used when entering a wizard section
    Cyan,
    /// Green - used for successful completion
    Green,
    /// Red - used for failure
    Red,
    /// Yellow - used for warnings and cancellations
    Yellow,
}

impl BannerColor {
    fn ansi_code(&self) -> &'static str {
        match self {
            BannerColor::Cyan => CYAN,
            BannerColor::Green => GREEN,
            BannerColor::Red => RED,
            BannerColor::Yellow => YELLOW,
        }
    }
}

fn banner_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
        .clamp(MIN_BANNER_WIDTH, MAX_BANNER_WIDTH)
}

/// Print a color-coded section banner: `━━━ SECTION ━━━`.
///
/// Width adapts to the terminal (clamped between MIN and MAX).
pub fn print_section_banner(name: &str, color: BannerColor) {
    let width = banner_width();
    let name_with_spaces = format!(" {} ", name);
    let name_len = name_with_spaces.chars().count();

    let remaining = width.saturating_sub(name_len);
    let left = remaining / 2;
    let right = remaining - left;

    println!(
        "{}{BOLD}{}{}{}{RESET}",
        color.ansi_code(),
        "━".repeat(left),
        name_with_spaces,
        "━".repeat(right),
    );
}

pub fn print_header() {
    println!("{CYAN}{BOLD}");
    println!("+---------------------------------------------------------+");
    println!(
        "|  prdgen v{}                                            |",
        env!("CARGO_PKG_VERSION")
    );
    println!("+---------------------------------------------------------+");
    println!("{RESET}");
}

pub fn print_error(msg: &str) {
    println!("{RED}{BOLD}Error:{RESET} {}", msg);
}

pub fn print_warning(msg: &str) {
    println!("{YELLOW}Warning:{RESET} {}", msg);
}

pub fn print_success(msg: &str) {
    println!("{GREEN}{}{RESET}", msg);
}

/// Print the generated PRD overview shown before persistence.
pub fn print_prd_summary(prd: &GeneratedPrd) {
    println!("{BLUE}Name:{RESET}    {}", prd.name);
    println!("{BLUE}Slug:{RESET}    {}", prd.slug);
    println!("{BLUE}Branch:{RESET}  {}", prd.branch_name);
    println!("{BLUE}Stories:{RESET} {}", prd.user_stories.len());
    for story in &prd.user_stories {
        println!(
            "  {GRAY}{}{RESET} {BOLD}[P{}]{RESET} {}",
            story.id, story.priority, story.title
        );
    }
    println!();
}

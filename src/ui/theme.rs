//! Light/dark class helpers so every page styles the two themes the
//! same way.

use crate::domain::Theme;

// ============================================
// PAGE CHROME
// ============================================

pub fn page_shell(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "min-h-screen bg-white text-slate-900 font-sans",
        Theme::Dark => "theme-dark min-h-screen bg-slate-950 text-slate-100 font-sans",
    }
}

pub fn header(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "relative z-10 w-full border-b border-slate-200 bg-white/90 shadow-md backdrop-blur",
        Theme::Dark => "relative z-10 w-full border-b border-slate-800 bg-slate-950/90 shadow-md backdrop-blur",
    }
}

pub fn footer(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "border-t border-slate-200 px-6 py-4 text-center text-xs text-slate-500",
        Theme::Dark => "border-t border-slate-800 px-6 py-4 text-center text-xs text-slate-500",
    }
}

// ============================================
// BUTTON STYLES
// ============================================

pub fn btn_primary(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "rounded bg-blue-500 px-4 py-2 text-sm font-bold text-white hover:bg-blue-700",
        Theme::Dark => "rounded bg-blue-500 px-4 py-2 text-sm font-bold text-white hover:bg-blue-400",
    }
}

pub fn btn_danger(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "rounded bg-red-500 px-4 py-2 text-sm font-bold text-white hover:bg-red-700",
        Theme::Dark => "rounded bg-red-500 px-4 py-2 text-sm font-bold text-white hover:bg-red-400",
    }
}

pub fn btn_ghost(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "rounded border border-slate-300 px-4 py-2 text-sm font-bold text-slate-700 hover:bg-slate-100",
        Theme::Dark => "rounded border border-slate-700 px-4 py-2 text-sm font-bold text-slate-200 hover:bg-slate-800",
    }
}

pub fn icon_button(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "cursor-pointer text-2xl transition hover:opacity-70",
        Theme::Dark => "cursor-pointer text-2xl transition hover:opacity-70",
    }
}

// ============================================
// FORM STYLES
// ============================================

pub fn input_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "w-full rounded-md border border-slate-300 bg-white px-3 py-2 text-sm shadow-sm focus:border-blue-500 focus:outline-none",
        Theme::Dark => "w-full rounded-md border border-slate-700 bg-slate-900 px-3 py-2 text-sm text-slate-100 shadow-sm focus:border-blue-400 focus:outline-none",
    }
}

pub fn label_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "mb-1 block text-sm font-medium text-slate-700",
        Theme::Dark => "mb-1 block text-sm font-medium text-slate-300",
    }
}

// ============================================
// PANEL / CARD STYLES
// ============================================

pub fn modal_panel(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "w-full rounded-lg bg-white p-6 md:max-w-lg",
        Theme::Dark => "w-full rounded-lg bg-slate-900 p-6 md:max-w-lg",
    }
}

pub fn card(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "rounded-xl border border-slate-200 bg-white p-5 shadow-sm",
        Theme::Dark => "rounded-xl border border-slate-800 bg-slate-900/60 p-5 shadow-sm",
    }
}

// ============================================
// TEXT STYLES
// ============================================

pub fn text_muted(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "text-slate-500",
        Theme::Dark => "text-slate-400",
    }
}

pub fn accent_text(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "text-blue-600",
        Theme::Dark => "text-blue-400",
    }
}

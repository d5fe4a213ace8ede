/*!
 * Plain-text reports over a subtitle file.
 *
 * Every writer takes any `std::io::Write`, so reports go to stdout in the CLI
 * and to a buffer in tests. Nothing here mutates the file.
 */

use std::io::{self, Write};

use clap::ValueEnum;

use crate::subtitle_file::SubtitleFile;
use crate::text_utils::{fit_to_width, rune_len};

// @const: Width of the set text column in the line set table
const SET_TEXT_WIDTH: usize = 50;

/// Which report to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportView {
    /// One row per subtitle block
    Blocks,
    /// One row per line set with word and char counts
    LineSets,
    /// Numbered original lines
    Original,
    /// Numbered translated lines
    Translated,
    /// Original and translated lines side by side
    SideBySide,
    /// Side by side with lengths, target and excess per line
    Split,
    /// The original SRT
    OriginalSrt,
    /// The translated SRT
    TranslatedSrt,
}

pub fn write_report<W: Write>(out: &mut W, file: &SubtitleFile, view: ReportView, width: usize) -> io::Result<()> {
    match view {
        ReportView::Blocks => write_blocks(out, file),
        ReportView::LineSets => write_line_sets(out, file),
        ReportView::Original => write_numbered(out, file.original_lines()),
        ReportView::Translated => write_numbered(out, file.translated_lines()),
        ReportView::SideBySide => write_side_by_side(out, file, width),
        ReportView::Split => write_split_traces(out, file, width),
        ReportView::OriginalSrt => out.write_all(file.original_srt().as_bytes()),
        ReportView::TranslatedSrt => out.write_all(file.translated_srt().as_bytes()),
    }
}

pub fn write_blocks<W: Write>(out: &mut W, file: &SubtitleFile) -> io::Result<()> {
    for block in file.blocks() {
        writeln!(out, "{}|{}|{:02} lines|", block.order, block.timemark, block.line_count)?;
    }
    Ok(())
}

pub fn write_line_sets<W: Write>(out: &mut W, file: &SubtitleFile) -> io::Result<()> {
    for stats in file.all_stats() {
        let text = file.line_set_text(stats.index).unwrap_or_default();
        writeln!(
            out,
            "Lineset {:03}{}, lines: {:04}-{:04}, Words: {:4}/{:<4}, Chars: {:5}/{:<5}, Ratio: {:6.4}, Txt: |>{}<|",
            stats.index,
            if stats.exact { '=' } else { '~' },
            stats.init_line,
            stats.last_line,
            stats.original_words,
            stats.translated_words,
            stats.original_chars,
            stats.translated_chars,
            stats.ratio,
            fit_to_width(text, SET_TEXT_WIDTH).trim_end()
        )?;
    }
    Ok(())
}

pub fn write_numbered<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for (i, line) in lines.iter().enumerate() {
        writeln!(out, "{:04}|{}", i, line)?;
    }
    Ok(())
}

pub fn write_side_by_side<W: Write>(out: &mut W, file: &SubtitleFile, width: usize) -> io::Result<()> {
    for (ls, set) in file.line_sets().iter().enumerate() {
        for line in set.lines() {
            writeln!(
                out,
                "{:03}|{:04}|>{}<|>{}<|",
                ls,
                line,
                fit_to_width(&file.original_lines()[line], width),
                fit_to_width(&file.translated_lines()[line], width)
            )?;
        }
    }
    Ok(())
}

/// Side by side view of one line set with the split bookkeeping of every line.
///
/// Target and excess are recomputed from the current lines, so manual edits show up
/// as drift from the proportional split.
pub fn write_split_trace<W: Write>(out: &mut W, file: &SubtitleFile, ls: usize, width: usize) -> io::Result<()> {
    let (Some(set), Some(ratio)) = (file.line_set(ls), file.ratio_of_line_set(ls)) else {
        return Ok(());
    };

    let mut excess = 0.0;
    for line in set.lines() {
        let original = &file.original_lines()[line];
        let translated = &file.translated_lines()[line];
        let len_orig = rune_len(original);
        let len_tran = rune_len(translated);
        let target = ratio * len_orig as f64 - excess;
        excess = len_tran as f64 - target;

        writeln!(
            out,
            "{:03}|{:04}|>{}<|>{}<| {:04} - {:04} ({:5.2}/{:+5.2})",
            ls,
            line,
            fit_to_width(original, width),
            fit_to_width(translated, width),
            len_orig,
            len_tran,
            target,
            excess
        )?;
    }
    Ok(())
}

pub fn write_split_traces<W: Write>(out: &mut W, file: &SubtitleFile, width: usize) -> io::Result<()> {
    for ls in 0..file.num_line_sets() {
        write_split_trace(out, file, ls, width)?;
    }
    Ok(())
}

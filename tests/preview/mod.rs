mod show_colored_diff_when_forced;
mod show_no_changes_for_identical_files;
mod show_plain_diff_for_modified_file;
mod show_stat_summary;
mod use_lookahead_strategy_with_narrow_window;

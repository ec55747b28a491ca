//! Behavioural tests for the read-more list.
//!
//! Fetch cycles are driven by awaiting the command the list returns and
//! feeding the resulting message back into `update`, the same way the
//! bubbletea-rs runtime would.

use super::*;
use bubbletea_rs::{Cmd, KeyMsg, Msg, WindowSizeMsg};
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Fetcher that replays a fixed list of pages and records every request.
#[derive(Clone, Default)]
struct ScriptedFetcher {
    pages: Arc<Mutex<VecDeque<Page>>>,
    calls: Arc<Mutex<Vec<usize>>>,
}

impl ScriptedFetcher {
    fn new(pages: &[Page]) -> Self {
        Self {
            pages: Arc::new(Mutex::new(pages.iter().copied().collect())),
            calls: Arc::default(),
        }
    }

    fn calls(&self) -> Vec<usize> {
        self.calls.lock().unwrap().clone()
    }
}

impl PageFetcher for ScriptedFetcher {
    fn fetch(&self, current_count: usize) -> FetchFuture {
        self.calls.lock().unwrap().push(current_count);
        let page = self.pages.lock().unwrap().pop_front().unwrap_or(Page::end());
        Box::pin(async move { page })
    }
}

/// Host that keeps every change it was told about.
#[derive(Clone, Default)]
struct RecordingHost(Arc<Mutex<Vec<RowChange>>>);

impl RecordingHost {
    fn take(&self) -> Vec<RowChange> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }
}

impl ListHost for RecordingHost {
    fn apply(&mut self, change: &RowChange) {
        self.0.lock().unwrap().push(change.clone());
    }
}

fn items(cell: Cell, row: usize) -> Cell {
    cell.with_content(format!("item{row}"))
}

fn list_with(fetcher: &ScriptedFetcher, height: usize) -> Model {
    Model::new(items, fetcher.clone(), 20, height).with_styles(ReadMoreStyles::plain())
}

fn contents(list: &Model) -> Vec<String> {
    (0..list.number_of_rows(CONTENT_SECTION))
        .map(|row| list.cell_for_row(IndexPath::content(row)).unwrap().content)
        .collect()
}

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    })
}

async fn deliver(list: &mut Model, cmd: Cmd) -> Option<Cmd> {
    let msg = cmd.await.expect("fetch should produce a message");
    list.update(msg)
}

#[tokio::test]
async fn test_pages_append_after_pinned_rows() {
    let fetcher = ScriptedFetcher::new(&[Page::new(3, true), Page::new(2, false)]);
    let mut list =
        list_with(&fetcher, 40).with_pinned_rows(vec![Cell::new("A"), Cell::new("B")]);

    let first = list.start().expect("footer on screen starts a fetch");
    assert_eq!(list.fetch_phase(), FetchPhase::Fetching);

    let second = deliver(&mut list, first)
        .await
        .expect("footer still on screen fetches again");
    assert_eq!(contents(&list), ["A", "B", "item0", "item1", "item2"]);
    assert_eq!(list.footer_state(), FooterState::Loading);
    assert_eq!(list.number_of_rows(FOOTER_SECTION), 1);

    assert!(deliver(&mut list, second).await.is_none());
    assert_eq!(
        contents(&list),
        ["A", "B", "item0", "item1", "item2", "item3", "item4"]
    );
    assert_eq!(list.footer_state(), FooterState::Hidden);
    assert_eq!(list.number_of_rows(FOOTER_SECTION), 0);
    assert_eq!(list.fetch_phase(), FetchPhase::Idle);
    assert_eq!(fetcher.calls(), vec![0, 3]);
}

#[tokio::test]
async fn test_host_sees_exact_row_changes() {
    let fetcher = ScriptedFetcher::new(&[Page::new(3, true), Page::new(2, false)]);
    let host = RecordingHost::default();
    let mut list = list_with(&fetcher, 40)
        .with_pinned_rows(vec![Cell::new("A"), Cell::new("B")])
        .with_host(host.clone());

    let first = list.start().unwrap();
    assert!(host.take().is_empty());

    let second = deliver(&mut list, first).await.unwrap();
    assert_eq!(
        host.take(),
        vec![
            RowChange::InsertRows {
                paths: (2..5).map(IndexPath::content).collect(),
                animation: RowAnimation::None,
            },
            RowChange::ReloadRows {
                paths: vec![IndexPath::footer()],
                animation: RowAnimation::None,
            },
        ]
    );

    deliver(&mut list, second).await;
    assert_eq!(
        host.take(),
        vec![
            RowChange::InsertRows {
                paths: (5..7).map(IndexPath::content).collect(),
                animation: RowAnimation::None,
            },
            RowChange::DeleteRows {
                paths: vec![IndexPath::footer()],
                animation: RowAnimation::Fade,
            },
        ]
    );
}

#[tokio::test]
async fn test_host_row_counts_track_the_list() {
    let pages = [
        Page::new(4, true),
        Page::new(0, true),
        Page::new(7, true),
        Page::new(1, false),
    ];
    let fetcher = ScriptedFetcher::new(&pages);
    let host = RecordingHost::default();
    let mut list = list_with(&fetcher, 200)
        .with_pinned_rows(vec![Cell::new("pinned")])
        .with_host(host.clone());

    let mut content_rows = list.number_of_rows(CONTENT_SECTION) as isize;
    let mut footer_rows = list.number_of_rows(FOOTER_SECTION) as isize;
    let mut next = list.start();
    while let Some(cmd) = next {
        next = deliver(&mut list, cmd).await;
        for change in host.take() {
            match (
                change.row_delta(CONTENT_SECTION),
                change.row_delta(FOOTER_SECTION),
            ) {
                (Some(content), Some(footer)) => {
                    content_rows += content;
                    footer_rows += footer;
                }
                _ => {
                    content_rows = list.number_of_rows(CONTENT_SECTION) as isize;
                    footer_rows = list.number_of_rows(FOOTER_SECTION) as isize;
                }
            }
        }
        assert_eq!(content_rows as usize, list.number_of_rows(CONTENT_SECTION));
        assert_eq!(content_rows as usize, 1 + list.main_row_count());
        assert_eq!(footer_rows as usize, list.number_of_rows(FOOTER_SECTION));
    }
    assert_eq!(list.main_row_count(), 12);
    assert_eq!(fetcher.calls(), vec![0, 4, 4, 11]);
}

#[tokio::test]
async fn test_next_page_waits_until_footer_is_displayed() {
    let fetcher = ScriptedFetcher::new(&[Page::new(10, true), Page::new(1, false)]);
    let mut list = list_with(&fetcher, 4);

    let first = list.start().unwrap();
    // ten rows push the footer below the four visible lines
    assert!(deliver(&mut list, first).await.is_none());
    assert_eq!(list.fetch_phase(), FetchPhase::AwaitingDisplay);
    assert!(!list.visible_rows().contains(&IndexPath::footer()));

    assert!(list.update(key(KeyCode::Down)).is_none());
    let cmd = list.update(key(KeyCode::End)).expect("footer scrolled into view");
    assert_eq!(list.cursor(), Some(IndexPath::footer()));
    assert!(deliver(&mut list, cmd).await.is_none());
    assert_eq!(list.main_row_count(), 11);
    assert_eq!(fetcher.calls(), vec![0, 10]);
}

#[tokio::test]
async fn test_exclusive_fetch_rejects_overlap() {
    let fetcher = ScriptedFetcher::new(&[Page::new(1, true)]);
    let mut list = list_with(&fetcher, 40);

    let pending = list.start().unwrap();
    list.update_footer(true);
    assert!(list.sync_visible_rows(true).is_none());

    deliver(&mut list, pending).await;
    assert_eq!(fetcher.calls(), vec![0]);
}

#[tokio::test]
async fn test_overlapping_fetches_keep_counts_consistent() {
    let fetcher = ScriptedFetcher::new(&[Page::new(3, false), Page::new(3, false)]);
    let host = RecordingHost::default();
    let config = Config::default().with_exclusive_fetch(false);
    let mut list = list_with(&fetcher, 40)
        .with_config(config)
        .unwrap()
        .with_host(host.clone());

    let first = list.start().unwrap();
    list.update_footer(true);
    let second = list.sync_visible_rows(true).expect("overlap allowed");
    host.take();

    deliver(&mut list, first).await;
    deliver(&mut list, second).await;
    assert_eq!(fetcher.calls(), vec![0, 0]);
    assert_eq!(list.main_row_count(), 3);
    let inserted: usize = host
        .take()
        .iter()
        .filter_map(|c| c.row_delta(CONTENT_SECTION))
        .map(|d| d as usize)
        .sum();
    assert_eq!(inserted, 3);
}

#[tokio::test]
async fn test_clear_data_resets_and_surfaces_footer() {
    let fetcher = ScriptedFetcher::new(&[Page::new(3, false), Page::new(2, false)]);
    let host = RecordingHost::default();
    let mut list = list_with(&fetcher, 40)
        .with_pinned_rows(vec![Cell::new("A")])
        .with_host(host.clone());

    let cmd = list.start().unwrap();
    deliver(&mut list, cmd).await;
    assert_eq!(list.main_row_count(), 3);
    assert_eq!(list.footer_state(), FooterState::Hidden);
    host.take();

    let cmd = list.clear_data().expect("footer on screen loads right away");
    assert_eq!(list.main_row_count(), 0);
    assert_eq!(list.footer_state(), FooterState::Loading);
    assert_eq!(list.cursor(), Some(IndexPath::footer()));
    assert_eq!(
        host.take(),
        vec![
            RowChange::ReloadData,
            RowChange::InsertRows {
                paths: vec![IndexPath::footer()],
                animation: RowAnimation::None,
            },
            RowChange::ScrollTo {
                path: IndexPath::footer(),
                position: ScrollPosition::Top,
            },
        ]
    );

    deliver(&mut list, cmd).await;
    assert_eq!(contents(&list), ["A", "item0", "item1"]);
    assert_eq!(fetcher.calls(), vec![0, 0]);
}

#[tokio::test]
async fn test_clear_data_with_footer_shown() {
    let fetcher = ScriptedFetcher::new(&[
        Page::new(3, true),
        Page::new(7, true),
        Page::new(2, false),
    ]);
    let host = RecordingHost::default();
    let mut list = list_with(&fetcher, 40).with_host(host.clone());

    let cmd = list.start().unwrap();
    let stale = deliver(&mut list, cmd).await.unwrap();
    assert_eq!(list.footer_state(), FooterState::Loading);
    host.take();

    let cmd = list.clear_data().expect("footer displayed again");
    assert_eq!(
        host.take(),
        vec![
            RowChange::ReloadData,
            RowChange::ReloadRows {
                paths: vec![IndexPath::footer()],
                animation: RowAnimation::None,
            },
            RowChange::ScrollTo {
                path: IndexPath::footer(),
                position: ScrollPosition::Top,
            },
        ]
    );
    assert_eq!(list.main_row_count(), 0);
    assert_eq!(list.cursor(), Some(IndexPath::footer()));

    assert!(deliver(&mut list, stale).await.is_none());
    assert_eq!(list.main_row_count(), 0);

    deliver(&mut list, cmd).await;
    assert_eq!(contents(&list), ["item0", "item1"]);
    assert_eq!(fetcher.calls(), vec![0, 3, 0]);
}

#[tokio::test]
async fn test_refresh_from_deep_in_the_list() {
    let fetcher = ScriptedFetcher::new(&[
        Page::new(30, true),
        Page::new(9, true),
        Page::new(4, false),
    ]);
    let host = RecordingHost::default();
    let mut list = list_with(&fetcher, 5)
        .with_pinned_rows(vec![Cell::new("A")])
        .with_host(host.clone());

    let cmd = list.start().unwrap();
    assert!(deliver(&mut list, cmd).await.is_none());
    let stale = list.update(key(KeyCode::End)).expect("footer reached");
    assert_eq!(list.cursor(), Some(IndexPath::footer()));
    assert!(!list.visible_rows().contains(&IndexPath::content(0)));
    host.take();

    let cmd = list.refresh().expect("refresh always fetches");
    assert_eq!(
        host.take(),
        vec![
            RowChange::ReloadData,
            RowChange::ReloadRows {
                paths: vec![IndexPath::footer()],
                animation: RowAnimation::None,
            },
        ]
    );
    assert_eq!(contents(&list), ["A"]);
    assert_eq!(list.cursor(), Some(IndexPath::footer()));
    assert!(list.visible_rows().contains(&IndexPath::footer()));

    assert!(deliver(&mut list, stale).await.is_none());
    assert!(host.take().is_empty());

    deliver(&mut list, cmd).await;
    assert_eq!(contents(&list), ["A", "item0", "item1", "item2", "item3"]);
    assert_eq!(
        host.take(),
        vec![
            RowChange::ReloadData,
            RowChange::DeleteRows {
                paths: vec![IndexPath::footer()],
                animation: RowAnimation::Fade,
            },
        ]
    );
    assert_eq!(list.cursor(), Some(IndexPath::content(1)));
    assert_eq!(fetcher.calls(), vec![0, 30, 0]);
}

#[tokio::test]
async fn test_refresh_drops_stale_pages_and_reloads() {
    let fetcher = ScriptedFetcher::new(&[
        Page::new(3, true),
        Page::new(5, true),
        Page::new(2, true),
    ]);
    let host = RecordingHost::default();
    let mut list = list_with(&fetcher, 40)
        .with_pinned_rows(vec![Cell::new("A"), Cell::new("B")])
        .with_host(host.clone());

    let first = list.start().unwrap();
    let stale = deliver(&mut list, first).await.unwrap();
    assert_eq!(list.main_row_count(), 3);

    let refresh = list.refresh().expect("refresh always fetches");
    assert_eq!(list.main_row_count(), 0);
    assert_eq!(list.pinned_count(), 2);
    assert_eq!(list.footer_state(), FooterState::Loading);
    host.take();

    // the page requested before the refresh is ignored
    assert!(deliver(&mut list, stale).await.is_none());
    assert_eq!(list.main_row_count(), 0);
    assert!(host.take().is_empty());

    deliver(&mut list, refresh).await;
    assert_eq!(contents(&list), ["A", "B", "item0", "item1"]);
    assert_eq!(host.take().first(), Some(&RowChange::ReloadData));
    assert_eq!(fetcher.calls(), vec![0, 3, 0]);
}

#[tokio::test]
async fn test_retry_button_suppresses_fetch_until_retry() {
    let fetcher = ScriptedFetcher::new(&[Page::new(0, true), Page::new(2, false)]);
    let mut list = list_with(&fetcher, 40);

    let failing = list.start().unwrap();
    list.show_retry_button();
    assert_eq!(list.footer_state(), FooterState::RetryVisible);
    assert_eq!(list.main_row_count(), 0);

    // the failed page re-asserts the footer but the retry button holds
    assert!(deliver(&mut list, failing).await.is_none());
    assert_eq!(list.fetch_phase(), FetchPhase::RetryVisible);
    assert!(list.set_size(20, 50).is_none());
    assert_eq!(fetcher.calls(), vec![0]);

    let retry = list.update(key(KeyCode::Char('r'))).expect("retry fetches");
    assert_eq!(list.footer_state(), FooterState::Loading);
    deliver(&mut list, retry).await;
    assert_eq!(list.main_row_count(), 2);
    assert_eq!(list.footer_state(), FooterState::Hidden);
    assert_eq!(fetcher.calls(), vec![0, 0]);
}

#[tokio::test]
async fn test_enter_on_footer_retries() {
    let fetcher = ScriptedFetcher::new(&[Page::new(0, true), Page::new(1, false)]);
    let mut list = list_with(&fetcher, 40);

    let cmd = list.start().unwrap();
    let abandoned = deliver(&mut list, cmd).await.unwrap();
    list.show_retry_button();
    assert!(list.is_fetching());

    assert_eq!(list.cursor(), Some(IndexPath::footer()));
    let cmd = list.update(key(KeyCode::Enter)).expect("enter activates retry");
    // the fetch issued before the retry no longer counts
    assert!(deliver(&mut list, abandoned).await.is_none());
    assert_eq!(list.main_row_count(), 0);

    deliver(&mut list, cmd).await;
    assert_eq!(list.main_row_count(), 0);
    assert_eq!(list.footer_state(), FooterState::Hidden);
    assert_eq!(fetcher.calls(), vec![0, 0, 0]);
}

#[test]
fn test_retry_is_ignored_without_button() {
    let fetcher = ScriptedFetcher::new(&[]);
    let mut list = list_with(&fetcher, 40);
    assert!(list.retry().is_none());
    assert!(fetcher.calls().is_empty());
}

#[tokio::test]
async fn test_dropped_list_yields_no_message() {
    let fetcher = ScriptedFetcher::new(&[Page::new(5, true)]);
    let mut list = list_with(&fetcher, 40);
    let cmd = list.start().unwrap();
    drop(list);
    assert!(cmd.await.is_none());
}

#[tokio::test]
async fn test_pages_for_other_lists_are_ignored() {
    let fetcher = ScriptedFetcher::new(&[Page::new(5, true)]);
    let mut a = list_with(&fetcher, 40);
    let mut b = list_with(&ScriptedFetcher::new(&[]), 40);

    let cmd = a.start().unwrap();
    let msg = cmd.await.unwrap();
    assert!(b.update(msg).is_none());
    assert_eq!(b.main_row_count(), 0);
}

#[tokio::test]
async fn test_height_estimates() {
    let fetcher = ScriptedFetcher::new(&[]);
    let mut list = list_with(&fetcher, 40).with_pinned_rows(vec![Cell::new("two\nlines")]);
    let pinned = IndexPath::content(0);

    assert_eq!(list.estimated_height(pinned), DEFAULT_ESTIMATED_ROW_HEIGHT);
    assert_eq!(list.cached_height(pinned), None);

    let cmd = list.start().unwrap();
    assert_eq!(list.estimated_height(pinned), 2);
    assert_eq!(list.estimated_height(IndexPath::footer()), 1);

    deliver(&mut list, cmd).await;
    // the footer is gone but its last height stays cached
    assert_eq!(list.cached_height(IndexPath::footer()), Some(1));
    assert_eq!(list.estimated_height(IndexPath::content(7)), 50);
}

#[test]
fn test_custom_height_estimate() {
    let config = Config::default().with_estimated_row_height(3);
    let list = list_with(&ScriptedFetcher::new(&[]), 40)
        .with_config(config)
        .unwrap();
    assert_eq!(list.estimated_height(IndexPath::content(0)), 3);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = Config::default().with_estimated_row_height(0);
    assert!(list_with(&ScriptedFetcher::new(&[]), 40)
        .with_config(config)
        .is_err());
}

#[tokio::test]
async fn test_selection_forwards_row_index() {
    let fetcher = ScriptedFetcher::new(&[Page::new(3, false)]);
    let picked = Arc::new(Mutex::new(Vec::new()));
    let sink = {
        let picked = Arc::clone(&picked);
        move |row: usize| -> Option<Cmd> {
            picked.lock().unwrap().push(row);
            None
        }
    };
    let mut list = list_with(&fetcher, 40)
        .with_pinned_rows(vec![Cell::new("A")])
        .with_selection_sink(sink);

    let cmd = list.start().unwrap();
    deliver(&mut list, cmd).await;

    list.update(key(KeyCode::Down));
    list.update(key(KeyCode::Down));
    list.update(key(KeyCode::Enter));
    list.update(key(KeyCode::Home));
    list.update(key(KeyCode::Enter));
    assert_eq!(*picked.lock().unwrap(), vec![2, 0]);

    assert_eq!(list.selected(), Some(IndexPath::content(0)));
    assert!(list.cell_for_row(IndexPath::content(0)).unwrap().selected);
    list.focus();
    assert_eq!(list.selected(), None);
}

#[test]
fn test_cell_for_row_bounds() {
    let list = list_with(&ScriptedFetcher::new(&[]), 40).with_pinned_rows(vec![Cell::new("A")]);
    assert_eq!(
        list.cell_for_row(IndexPath::content(1)).unwrap_err(),
        ReadMoreError::RowOutOfBounds {
            path: IndexPath::content(1),
            rows: 1,
        }
    );
    assert_eq!(
        list.cell_for_row(IndexPath::new(2, 0)).unwrap_err(),
        ReadMoreError::UnknownSection(2)
    );
    assert!(list.cell_for_row(IndexPath::footer()).is_ok());
    assert_eq!(list.number_of_sections(), 2);
    assert_eq!(list.number_of_rows(5), 0);
}

#[test]
fn test_factory_gets_index_without_pinned_rows() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let factory = {
        let seen = Arc::clone(&seen);
        move |cell: Cell, row: usize| {
            seen.lock().unwrap().push(row);
            cell
        }
    };
    let mut list = Model::new(factory, ScriptedFetcher::new(&[]), 20, 40)
        .with_pinned_rows(vec![Cell::new("A"), Cell::new("B")]);
    list.main_row_count = 2;
    list.cell_for_row(IndexPath::content(3)).unwrap();
    list.cell_for_row(IndexPath::content(1)).unwrap();
    assert_eq!(*seen.lock().unwrap(), vec![1]);
}

#[tokio::test]
async fn test_set_pinned_rows_reloads() {
    let fetcher = ScriptedFetcher::new(&[Page::new(2, false)]);
    let host = RecordingHost::default();
    let mut list = list_with(&fetcher, 40).with_host(host.clone());
    let cmd = list.start().unwrap();
    deliver(&mut list, cmd).await;
    host.take();

    assert!(list.set_pinned_rows(vec![Cell::new("new")]).is_none());
    assert_eq!(host.take(), vec![RowChange::ReloadData]);
    assert_eq!(contents(&list), ["new", "item0", "item1"]);
}

#[test]
fn test_view_renders_rows_and_loading_footer() {
    let mut list = list_with(&ScriptedFetcher::new(&[]), 40)
        .with_pinned_rows(vec![Cell::new("A"), Cell::new("B")]);
    let _fetch = list.start();

    let view = strip_ansi_escapes::strip_str(list.view());
    let lines: Vec<&str> = view.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "│ A");
    assert_eq!(lines[1], "  B");
    assert_eq!(lines[2].trim(), "⠋ Loading…");
    assert!(lines[2].starts_with("     "));
}

#[test]
fn test_view_shows_configured_retry_button() {
    let config = Config::default()
        .with_retry(RetryAffordance::new().with_text("Again").with_icon("↻"));
    let mut list = list_with(&ScriptedFetcher::new(&[]), 40)
        .with_config(config)
        .unwrap();
    list.show_retry_button();

    let view = strip_ansi_escapes::strip_str(list.view());
    assert_eq!(view.trim(), "↻ Again");
    assert!(list.help_view().contains("r retry"));
}

#[test]
fn test_view_is_cut_to_height() {
    let rows = (0..10).map(|i| Cell::new(format!("p{i}"))).collect();
    let mut list = list_with(&ScriptedFetcher::new(&[]), 3).with_pinned_rows(rows);
    assert!(list.start().is_none());
    assert_eq!(list.view().lines().count(), 3);

    list.update(Box::new(WindowSizeMsg {
        width: 20,
        height: 5,
    }));
    assert_eq!(list.view().lines().count(), 5);
}

#[test]
fn test_help_hides_retry_while_loading() {
    let list = list_with(&ScriptedFetcher::new(&[]), 40);
    let help = list.help_view();
    assert!(help.contains("↑/k up"));
    assert!(!help.contains("retry"));
}

#[test]
fn test_indicator_ticks_are_forwarded() {
    let mut list = list_with(&ScriptedFetcher::new(&[]), 40);
    let tick = list.activity.tick_msg();
    assert!(list.update(Box::new(tick)).is_some());
    assert_eq!(list.activity.frame(), "⠙");
}

#[tokio::test]
async fn test_end_on_long_list_renders_one_screen() {
    let fetcher = ScriptedFetcher::new(&[Page::new(3000, true)]);
    let built = Arc::new(AtomicUsize::new(0));
    let factory = {
        let built = Arc::clone(&built);
        move |cell: Cell, row: usize| {
            built.fetch_add(1, Ordering::SeqCst);
            cell.with_content(format!("item{row}"))
        }
    };
    let mut list =
        Model::new(factory, fetcher.clone(), 20, 20).with_styles(ReadMoreStyles::plain());

    let cmd = list.start().unwrap();
    assert!(deliver(&mut list, cmd).await.is_none());
    built.store(0, Ordering::SeqCst);

    assert!(list.update(key(KeyCode::End)).is_some());
    assert_eq!(list.cursor(), Some(IndexPath::footer()));
    let visible = list.visible_rows();
    assert_eq!(visible.len(), 20);
    assert_eq!(visible.first(), Some(&IndexPath::content(2981)));
    // one screen for the scroll and one for the display pass
    assert!(built.load(Ordering::SeqCst) < 60);

    built.store(0, Ordering::SeqCst);
    list.update(key(KeyCode::Home));
    assert!(built.load(Ordering::SeqCst) < 60);
    assert_eq!(list.visible_rows().first(), Some(&IndexPath::content(0)));
}

#[tokio::test]
async fn test_embedded_indicator_animates() {
    let mut list = list_with(&ScriptedFetcher::new(&[]), 40);
    let _fetch = list.start();
    let before = strip_ansi_escapes::strip_str(list.view());
    assert_eq!(before.trim(), "⠋ Loading…");

    let tick = list.tick();
    let next = deliver(&mut list, tick).await;
    assert!(next.is_some(), "each tick schedules the next");
    let after = strip_ansi_escapes::strip_str(list.view());
    assert_eq!(after.trim(), "⠙ Loading…");
}

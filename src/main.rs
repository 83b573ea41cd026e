use dioxus::events::FormData;
use dioxus::prelude::*;
use web_sys::console;

mod api;
mod chart;
mod i18n;
mod state;
mod types;
mod ui_utils;

use i18n::Lang;
use state::DupReport;
use types::FileNode;
use ui_utils::{confirm, fmt_bytes, show_toast};

const CHART_CANVAS_ID: &str = "file-chart";
// Cap forwarded to the explain endpoint; groups beyond it keep no explanation.
const MAX_EXPLAIN_GROUPS: u32 = 10;

/// Which rendering of the scanned tree is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VizView {
    Tree,
    Chart,
}

pub fn main() {
    console_error_panic_hook::set_once();
    dioxus_web::launch::launch(app, vec![], Default::default());
}

fn app() -> Element {
    let lang = use_signal(|| Lang::En);
    let path_input = use_signal(String::new);
    let tree = use_signal(|| None as Option<FileNode>);
    let report = use_signal(DupReport::default);
    // One shared flag: while any request is in flight, every network-triggering
    // control is disabled, so requests never interleave.
    let loading = use_signal(|| false);
    let action_err = use_signal(|| None as Option<String>);
    let viz_view = use_signal(|| VizView::Tree);
    let chart_err = use_signal(|| None as Option<String>);

    // Redraw the doughnut whenever a new tree arrives. A failure here only
    // swaps the chart area for a placeholder; the rest of the page stays up.
    {
        let tree_state = tree.clone();
        let chart_err_state = chart_err.clone();
        use_effect(move || {
            let slices = match tree_state.read().as_ref() {
                Some(root) => chart::top_slices(root),
                None => Vec::new(),
            };
            let mut chart_err2 = chart_err_state.clone();
            match chart::draw_doughnut(CHART_CANVAS_ID, &slices) {
                Ok(()) => chart_err2.set(None),
                Err(e) => {
                    console::log_1(&format!("chart disabled: {}", e).into());
                    chart_err2.set(Some(e));
                }
            }
        });
    }

    let on_scan = {
        let path_state = path_input.clone();
        let tree_state = tree.clone();
        let loading_state = loading.clone();
        let err_state = action_err.clone();
        let lang_state = lang.clone();
        move |_| {
            if *loading_state.read() {
                return;
            }
            let path = path_state.read().trim().to_string();
            if path.is_empty() {
                show_toast(lang_state.read().labels().path_required);
                return;
            }
            let mut loading2 = loading_state.clone();
            loading2.set(true);
            let tree2 = tree_state.clone();
            let err2 = err_state.clone();
            let lang2 = lang_state.clone();
            spawn(async move {
                let mut tree2 = tree2.clone();
                let mut err2 = err2.clone();
                let mut loading2 = loading2.clone();
                match api::scan(&path).await {
                    Ok(root) => {
                        tree2.set(Some(root));
                        err2.set(None);
                    }
                    // the previously scanned tree stays untouched
                    Err(e) => err2.set(Some(format!("{}: {}", lang2.read().labels().scan_failed, e))),
                }
                loading2.set(false);
            });
        }
    };

    let on_check_dup = {
        let path_state = path_input.clone();
        let report_state = report.clone();
        let loading_state = loading.clone();
        let err_state = action_err.clone();
        let lang_state = lang.clone();
        move |_| {
            if *loading_state.read() {
                return;
            }
            let path = path_state.read().trim().to_string();
            if path.is_empty() {
                show_toast(lang_state.read().labels().path_required);
                return;
            }
            let mut loading2 = loading_state.clone();
            loading2.set(true);
            let report2 = report_state.clone();
            let err2 = err_state.clone();
            let lang2 = lang_state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let mut report2 = report2.clone();
                let mut err2 = err2.clone();
                let mut loading2 = loading2.clone();
                match api::check_duplicates(&path).await {
                    Ok(groups) => {
                        report2.write().replace(groups);
                        err2.set(None);
                    }
                    Err(e) => err2.set(Some(format!("{}: {}", lang2.read().labels().dup_failed, e))),
                }
                loading2.set(false);
            });
        }
    };

    let on_explain = {
        let path_state = path_input.clone();
        let report_state = report.clone();
        let loading_state = loading.clone();
        let err_state = action_err.clone();
        let lang_state = lang.clone();
        move |_| {
            if *loading_state.read() {
                return;
            }
            if !report_state.read().show_explain() {
                return;
            }
            let path = path_state.read().trim().to_string();
            if path.is_empty() {
                show_toast(lang_state.read().labels().path_required);
                return;
            }
            let mut loading2 = loading_state.clone();
            loading2.set(true);
            let req = api::ExplainRequest {
                path,
                lang: lang_state.read().code().to_string(),
                max_groups: MAX_EXPLAIN_GROUPS,
            };
            let report2 = report_state.clone();
            let err2 = err_state.clone();
            let lang2 = lang_state.clone();
            spawn(async move {
                let mut report2 = report2.clone();
                let mut err2 = err2.clone();
                let mut loading2 = loading2.clone();
                match api::explain_duplicates(&req).await {
                    Ok(resp) => {
                        report2.write().merge_explanations(&resp.groups);
                        err2.set(None);
                    }
                    Err(e) => err2.set(Some(format!("{}: {}", lang2.read().labels().explain_failed, e))),
                }
                loading2.set(false);
            });
        }
    };

    let on_delete = {
        let path_state = path_input.clone();
        let report_state = report.clone();
        let loading_state = loading.clone();
        let err_state = action_err.clone();
        let lang_state = lang.clone();
        move |_| {
            if *loading_state.read() {
                return;
            }
            let files = report_state.read().selected();
            if files.is_empty() {
                // client-side warning only, no request goes out
                show_toast(lang_state.read().labels().nothing_selected);
                return;
            }
            if !confirm(&lang_state.read().delete_confirm(files.len())) {
                return;
            }
            let path = path_state.read().trim().to_string();
            let mut loading2 = loading_state.clone();
            loading2.set(true);
            let report2 = report_state.clone();
            let err2 = err_state.clone();
            let lang2 = lang_state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let mut report2 = report2.clone();
                let mut err2 = err2.clone();
                let mut loading2 = loading2.clone();
                match api::delete_files(files).await {
                    Ok(resp) => {
                        for failure in &resp.errors {
                            console::error_1(
                                &format!("delete failed for {}: {}", failure.file, failure.error).into(),
                            );
                        }
                        show_toast(&lang2.read().delete_success(resp.count));
                        report2.write().clear_selection();
                        // re-check so the report reflects the new on-disk state
                        match api::check_duplicates(&path).await {
                            Ok(groups) => {
                                report2.write().replace(groups);
                                err2.set(None);
                            }
                            Err(e) => {
                                err2.set(Some(format!("{}: {}", lang2.read().labels().dup_failed, e)))
                            }
                        }
                    }
                    Err(e) => {
                        // selection stays intact for a retry
                        err2.set(Some(format!("{}: {}", lang2.read().labels().delete_failed, e)))
                    }
                }
                loading2.set(false);
            });
        }
    };

    let on_lang = {
        let lang_state = lang.clone();
        move |_| {
            let next = lang_state.read().toggle();
            let mut lang2 = lang_state.clone();
            lang2.set(next);
        }
    };

    let show_tree_view = {
        let view_state = viz_view.clone();
        move |_| {
            let mut view2 = view_state.clone();
            view2.set(VizView::Tree);
        }
    };
    let show_chart_view = {
        let view_state = viz_view.clone();
        move |_| {
            let mut view2 = view_state.clone();
            view2.set(VizView::Chart);
        }
    };

    let labels = lang.read().labels();
    let badge = lang.read().badge();
    let is_loading = *loading.read();
    let has_tree = tree.read().is_some();
    let (tree_display, chart_display) = match *viz_view.read() {
        VizView::Tree => ("", "display:none;"),
        VizView::Chart => ("display:none;", ""),
    };
    let tree_btn_class = if *viz_view.read() == VizView::Tree { "btn active" } else { "btn" };
    let chart_btn_class = if *viz_view.read() == VizView::Chart { "btn active" } else { "btn" };
    let slices = tree.read().as_ref().map(chart::top_slices).unwrap_or_default();
    let show_explain = report.read().show_explain();
    let n_selected = report.read().selection_len();

    rsx! {
        div { // root wrapper
            div { class: "app-header",
                div { class: "container",
                    div { class: "brand",
                        span { "🗂 DupLens" }
                    }
                    nav {
                        button { class: "btn", onclick: on_lang, "{badge}" }
                    }
                }
            }
            // Scan controls
            section { class: "panel",
                h2 { "{labels.scan_title}" }
                div { class: "input-group",
                    input { class: "form-control", value: "{path_input}", placeholder: "{labels.path_placeholder}",
                        oninput: move |e: Event<FormData>| { let mut path_input2 = path_input.clone(); path_input2.set(e.value()); } }
                    div { class: "input-group-append",
                        button { class: "btn btn-primary", disabled: is_loading, onclick: on_scan, "{labels.scan_btn}" }
                        button { class: "btn", disabled: is_loading, onclick: on_check_dup, "{labels.check_dup_btn}" }
                    }
                }
                { is_loading.then(|| rsx!(div { class: "loading",
                    span { class: "spinner", "" }
                    span { " {labels.loading}" }
                })) }
                { action_err.read().as_ref().map(|e| rsx!(div { class: "alert alert-error", "{e}" })) }
            }
            // Tree and chart renderings of the last scan
            section { class: "panel",
                h2 { "{labels.viz_title}" }
                div { class: "view-toggles",
                    button { class: "{tree_btn_class}", onclick: show_tree_view, "{labels.view_tree}" }
                    button { class: "{chart_btn_class}", onclick: show_chart_view, "{labels.view_chart}" }
                }
                div { class: "file-tree", style: "{tree_display}",
                    { (!has_tree).then(|| rsx!(div { class: "empty-state", "{labels.scan_empty}" })) }
                    { tree.read().as_ref().map(|root| rsx! { TreeNodeView { node: root.clone() } }) }
                }
                div { class: "chart-container", style: "{chart_display}",
                    { chart_err.read().as_ref().map(|_| rsx!(div { class: "empty-state", "{labels.chart_unavailable}" })) }
                    canvas { id: "{CHART_CANVAS_ID}", width: "420", height: "320" }
                    { (!slices.is_empty()).then(|| rsx! {
                        div { class: "chart-legend",
                            { slices.iter().map(|slice| {
                                let swatch = format!("background-color:{};", slice.color);
                                rsx! { div { class: "legend-item",
                                    span { class: "legend-swatch", style: "{swatch}" }
                                    span { " {slice.label} ({fmt_bytes(slice.size)})" }
                                } }
                            }) }
                        }
                    }) }
                }
            }
            // Duplicate report
            section { class: "panel",
                h2 { "{labels.dedup_title}" }
                div { class: "dedup-content",
                    {
                        if report.read().groups.is_empty() {
                            rsx! { div { class: "empty-state", p { "{labels.dedup_empty}" } } }
                        } else {
                            rsx! {
                                { report.read().groups.iter().map(|group| {
                                    let wasted = fmt_bytes(group.wasted());
                                    let copies = group.paths.len();
                                    let per_copy = fmt_bytes(group.size);
                                    rsx! {
                                        div { class: "dup-group glass-panel",
                                            div { class: "dup-header",
                                                span { "{labels.wasted_space}: {wasted}" }
                                                span { "{copies} {labels.files} ({per_copy} {labels.per_copy})" }
                                            }
                                            div { class: "dup-paths",
                                                { group.paths.iter().map(|p| {
                                                    let path = p.clone();
                                                    let checked_now = report.read().is_selected(p);
                                                    let report_toggle = report.clone();
                                                    rsx! {
                                                        label { class: "dup-path",
                                                            input {
                                                                r#type: "checkbox",
                                                                checked: checked_now,
                                                                oninput: move |_| {
                                                                    let mut report2 = report_toggle.clone();
                                                                    report2.write().toggle(&path);
                                                                },
                                                            }
                                                            span { " {p}" }
                                                        }
                                                    }
                                                }) }
                                            }
                                            { group.explanation.as_ref().map(|text| rsx! {
                                                div { class: "dup-explanation",
                                                    strong { "{labels.explanation}: " }
                                                    span { "{text}" }
                                                }
                                            }) }
                                            div { class: "dup-warning", "💡 {labels.suggestion}" }
                                        }
                                    }
                                }) }
                            }
                        }
                    }
                }
                div { class: "toolbar",
                    { show_explain.then(|| rsx! {
                        button { class: "btn", disabled: is_loading, onclick: on_explain, "{labels.explain_btn}" }
                    }) }
                    { (n_selected > 0).then(|| rsx! {
                        button { class: "btn btn-danger", disabled: is_loading, onclick: on_delete, "{labels.delete_btn} ({n_selected})" }
                    }) }
                }
            }
            // Toast container for notifications
            div { id: "toasts", class: "toast-container" }
        }
    }
}

/// One row of the collapsible hierarchy. Directories start collapsed; a
/// click on a directory header toggles only its own children and never
/// bubbles into ancestor headers.
#[component]
fn TreeNodeView(node: FileNode) -> Element {
    let open = use_signal(|| false);

    if node.is_dir() {
        let is_open = *open.read();
        let icon = if is_open { "📂" } else { "📁" };
        let nested_style = if is_open { "" } else { "display:none;" };
        rsx! {
            div { class: "file-tree-item",
                div { class: "folder-header",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        let now = *open.read();
                        let mut open2 = open.clone();
                        open2.set(!now);
                    },
                    span { "{icon} {node.name} " }
                    span { class: "size-badge", "{fmt_bytes(node.size)}" }
                }
                div { class: "nested", style: "{nested_style}",
                    { node.children.iter().map(|child| rsx! { TreeNodeView { node: child.clone() } }) }
                }
            }
        }
    } else {
        rsx! {
            div { class: "file-tree-item",
                div { class: "file-item",
                    span { "📄 {node.name} " }
                    span { class: "size-badge", "{fmt_bytes(node.size)}" }
                }
            }
        }
    }
}

//! Task Tree Page
//!
//! Skill tree canvas: nodes at percent positions joined by SVG connectors,
//! plus a detail card for the selected node.

use leptos::prelude::*;
use taskquest_core::progress::{RingColor, RingSize};
use taskquest_core::task_tree::{Branch, NodeStatus};

use crate::components::ProgressRing;
use crate::store::{store_complete_node, use_app_store, AppStateStoreFields};

#[component]
pub fn TaskTreePage() -> impl IntoView {
    let store = use_app_store();
    let (selected, set_selected) = signal(None::<&'static str>);
    let (notice, set_notice) = signal(None::<String>);

    let connectors = move || {
        store.tree().with(|t| t.connectors()).into_iter().map(|c| view! {
            <line
                x1=format!("{}%", c.from.0)
                y1=format!("{}%", c.from.1)
                x2=format!("{}%", c.to.0)
                y2=format!("{}%", c.to.1)
                class=if c.dashed { "connector locked" } else { "connector" }
                stroke-dasharray=if c.dashed { "6 4" } else { "none" }
            />
        }).collect_view()
    };

    let nodes = move || {
        let tree = store.tree().read();
        let views = tree.nodes().iter().map(|node| {
            let id = node.id;
            let status = tree.status_of(node);
            view! {
                <button
                    class=move || {
                        let active = if selected.get() == Some(id) { " selected" } else { "" };
                        format!("tree-node {}{}", status.label(), active)
                    }
                    style=format!("left: {}%; top: {}%;", node.x, node.y)
                    title=node.title
                    on:click=move |_| {
                        set_notice.set(None);
                        set_selected.set(Some(id));
                    }
                >
                    <img src=node.icon alt=node.title />
                    {(status == NodeStatus::Locked).then(|| view! { <span class="node-lock">"🔒"</span> })}
                </button>
            }
        }).collect_view();
        views
    };

    let start_task = move |id: &'static str| {
        match store_complete_node(&store, id) {
            Ok(unlocked) if unlocked.is_empty() => set_notice.set(Some("Task completed!".to_string())),
            Ok(unlocked) => set_notice.set(Some(format!("Unlocked: {}", unlocked.join(", ")))),
            Err(e) => {
                log::warn!("cannot complete {}: {}", id, e);
                set_notice.set(Some(e));
            }
        }
    };

    let details = move || {
        let id = selected.get()?;
        let tree = store.tree().read();
        let node = tree.node(id).ok()?.clone();
        let status = tree.status_of(&node);
        let prerequisites: Vec<&'static str> = node
            .prerequisites
            .iter()
            .filter_map(|p| tree.node(p).ok().map(|n| n.title))
            .collect();
        drop(tree);

        Some(view! {
            <section class="glass-card node-details">
                <div class=format!("node-details-icon {}", status.label())>
                    <img src=node.icon alt=node.title />
                </div>
                <div class="node-details-body">
                    <div class="node-details-title">
                        <h3>{node.title}</h3>
                        <span class=format!("status-tag {}", status.label())>{status.label()}</span>
                    </div>
                    <p class="muted">{node.description}</p>
                    <p class="muted">{node.branch.label()}</p>
                    {(!prerequisites.is_empty()).then(|| view! {
                        <div class="prerequisites">
                            <h4>"Prerequisites:"</h4>
                            {prerequisites.into_iter().map(|title| view! { <span class="prereq-tag">{title}</span> }).collect_view()}
                        </div>
                    })}
                    {move || notice.get().map(|n| view! { <p class="notice">{n}</p> })}
                    <div class="node-actions">
                        {match status {
                            NodeStatus::Available => view! {
                                <button class="primary-btn" on:click=move |_| start_task(id)>"Start Task"</button>
                            }.into_any(),
                            NodeStatus::Completed => view! {
                                <button class="outline-btn" disabled=true>"✔ Completed"</button>
                            }.into_any(),
                            NodeStatus::Locked => ().into_any(),
                        }}
                        <button class="ghost-btn" on:click=move |_| set_selected.set(None)>"Close"</button>
                    </div>
                </div>
            </section>
        })
    };

    let branch_ring = move |branch: Branch, color: RingColor| {
        let progress = Signal::derive(move || store.tree().with(|t| t.branch_progress(branch)));
        view! {
            <ProgressRing progress=progress color=color size=RingSize::Sm label=branch.label() category=branch.label() />
        }
    };

    view! {
        <div class="task-tree-page">
            <header class="page-header">
                <h2>"🌳 Task Tree"</h2>
                <div class="branch-legend">
                    {branch_ring(Branch::SelfCare, RingColor::Success)}
                    {branch_ring(Branch::Chores, RingColor::Accent)}
                    {branch_ring(Branch::Studying, RingColor::Primary)}
                </div>
            </header>

            <div class="glass-card tree-canvas">
                <svg class="tree-connectors">{connectors}</svg>
                {nodes}
            </div>

            {details}
        </div>
    }
}

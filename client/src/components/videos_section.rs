//! Curated playlists grouped by channel, with embedded players.

use leptos::prelude::*;
use wire::{Channel, Video};

use crate::state::videos::VideosPanel;

const PLAYER_ALLOW: &str = "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

#[component]
pub fn VideosSection() -> impl IntoView {
    let panel = RwSignal::new(VideosPanel::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::net::flows::load_videos(&panel, &crate::net::api::backend()).await;
    });

    view! {
        <h2 class="section__title">"Curated YouTube Playlists"</h2>
        {move || match panel.with(VideosPanel::placeholder) {
            Some(text) => view! { <p class="placeholder">{text}</p> }.into_any(),
            None => {
                let cards = panel
                    .with(|p| p.channels().to_vec())
                    .into_iter()
                    .map(|channel| view! { <ChannelCard channel/> })
                    .collect_view();
                view! { <div class="channel-grid">{cards}</div> }.into_any()
            }
        }}
    }
}

#[component]
fn ChannelCard(channel: Channel) -> impl IntoView {
    let topics = channel.topics_label();
    let videos = channel.videos.into_iter().map(|video| view! { <VideoEmbed video/> }).collect_view();

    view! {
        <div class="card channel">
            <div class="channel__head">
                <h3 class="channel__name">{channel.name}</h3>
                <a class="channel__link" href=channel.url target="_blank">
                    "Visit"
                </a>
            </div>
            <p class="channel__topics">"Topics: " {topics}</p>
            <div class="channel__videos">{videos}</div>
        </div>
    }
}

#[component]
fn VideoEmbed(video: Video) -> impl IntoView {
    let src = video.embed_url();
    let title = video.title.clone();

    view! {
        <div class="video">
            <p class="video__title">{video.title}</p>
            <div class="video__frame">
                <iframe src=src title=title allow=PLAYER_ALLOW allowfullscreen=true></iframe>
            </div>
        </div>
    }
}

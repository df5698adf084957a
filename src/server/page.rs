// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use axum::response::Html;

/// `GET /`: the catalog page. A static page whose script drives the API:
/// it fetches the list on load and on Refresh, and the per-video Edit
/// action prompts for a title, submits it and re-fetches. Overlapping
/// refreshes are not sequenced; the last response to land wins.
pub(crate) async fn home() -> Html<&'static str> {
    Html(PAGE_HTML)
}

const PAGE_HTML: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<title>Your Videos</title>
<style>
body { font-family: sans-serif; margin: 20px; }
.video { margin: 20px 0; padding: 10px; border: 1px solid #ccc; }
</style>
</head>
<body>
<h1>Your Videos</h1>
<p id="signin" hidden><a href="/auth/login">Sign in</a> to view your videos.</p>
<p>
<button id="refresh">Refresh Videos</button>
<a href="/auth/logout">Sign out</a>
</p>
<div id="videos"></div>
<script>
const refreshButton = document.getElementById('refresh');
const signinNote = document.getElementById('signin');
const videosDiv = document.getElementById('videos');

async function fetchVideos() {
  refreshButton.disabled = true;
  refreshButton.textContent = 'Loading...';
  try {
    const response = await fetch('/api/videos');
    if (response.status === 401) {
      signinNote.hidden = false;
      videosDiv.textContent = '';
      return;
    }
    const data = await response.json();
    if (data.videos) {
      signinNote.hidden = true;
      renderVideos(data.videos);
    }
  } catch (error) {
    console.error('Error fetching videos:', error);
  } finally {
    refreshButton.disabled = false;
    refreshButton.textContent = 'Refresh Videos';
  }
}

async function updateVideoTitle(videoId, newTitle) {
  try {
    const response = await fetch('/api/videos', {
      method: 'PUT',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({
        videoId,
        updates: { snippet: { title: newTitle } },
      }),
    });
    if (response.ok) {
      fetchVideos();
    }
  } catch (error) {
    console.error('Error updating video:', error);
  }
}

function renderVideos(videos) {
  videosDiv.textContent = '';
  for (const video of videos) {
    const item = document.createElement('div');
    item.className = 'video';

    const title = document.createElement('h3');
    title.textContent = video.snippet.title;
    item.appendChild(title);

    const views = document.createElement('p');
    views.textContent = 'Views: ' + video.statistics.viewCount;
    item.appendChild(views);

    const likes = document.createElement('p');
    likes.textContent = 'Likes: ' + video.statistics.likeCount;
    item.appendChild(likes);

    const published = document.createElement('p');
    published.textContent =
      'Published: ' + new Date(video.snippet.publishedAt).toLocaleDateString();
    item.appendChild(published);

    const edit = document.createElement('button');
    edit.textContent = 'Edit Title';
    edit.addEventListener('click', () => {
      const newTitle = prompt('Enter new title:', video.snippet.title);
      if (newTitle) {
        updateVideoTitle(video.id, newTitle);
      }
    });
    item.appendChild(edit);

    videosDiv.appendChild(item);
  }
}

refreshButton.addEventListener('click', fetchVideos);
fetchVideos();
</script>
</body>
</html>
"#;

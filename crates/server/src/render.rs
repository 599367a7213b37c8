//! HTML presentation of the chat thread and the single page that hosts it.

use std::fmt::Write as _;

use assistant::Transcript;
use shared::domain::Role;

/// Renders every transcript entry, oldest first, as a role-styled block.
pub fn render_thread(transcript: &Transcript) -> String {
    let mut html = String::new();
    for message in transcript {
        let class = match message.role {
            Role::User => "user-msg",
            Role::Assistant => "bot-msg",
        };
        let _ = write!(
            html,
            "<div class='{class}'>{}</div>",
            escape_html(&message.content)
        );
    }
    html
}

/// Escapes markup-significant characters and keeps line breaks visible.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\n' => out.push_str("<br>"),
            _ => out.push(ch),
        }
    }
    out
}

pub const PAGE: &str = r##"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>CareerAI 💼</title>
<style>
body {
    background-color: #0A0F19;
    color: #E6E6E6;
    font-family: sans-serif;
    max-width: 760px;
    margin: 0 auto;
    padding: 16px;
}
.user-msg, .bot-msg {
    padding: 12px 18px;
    border-radius: 18px;
    margin: 8px 0;
    max-width: 75%;
    font-size: 16px;
    line-height: 1.4;
    color: white;
}
.user-msg {
    background: linear-gradient(135deg, #544d4d, #473d3d);
    margin-left: auto;
    text-align: right;
}
.bot-msg {
    background: linear-gradient(135deg, #1f1b1b, #1a1818);
    margin-right: auto;
}
#thread { overflow-y: auto; max-height: 70vh; }
#thinking { color: #9B9B9B; visibility: hidden; }
form { display: flex; gap: 8px; }
input { flex: 1; padding: 10px; background: #0A0F19; color: #E6E6E6; border: 1px solid #1F1F1F; }
</style>
</head>
<body>
<h1 style="text-align:center; color:#C27EFF;">💼 CareerAI</h1>
<p style="text-align:center; color:#9B9B9B;">
Your AI assistant for resumes, interviews, job search &amp; LinkedIn guidance.
</p>
<hr style="border: 1px solid #1F1F1F; margin: 20px 0;">
<div id="thread"></div>
<p id="thinking">CareerAI is thinking...</p>
<form id="chat">
<input id="input" autocomplete="off" placeholder="Ask CareerAI about jobs, resumes, interviews…">
</form>
<script>
const thread = document.getElementById("thread");
const thinking = document.getElementById("thinking");
const input = document.getElementById("input");

async function startSession() {
    const res = await fetch("/sessions", { method: "POST" });
    const body = await res.json();
    sessionStorage.setItem("careerai_session", body.session_id);
    return body.session_id;
}

async function sessionId() {
    return sessionStorage.getItem("careerai_session") || startSession();
}

async function refresh(id) {
    const res = await fetch(`/sessions/${id}/thread`);
    if (res.status === 404) {
        sessionStorage.removeItem("careerai_session");
        return false;
    }
    thread.innerHTML = await res.text();
    thread.scrollTop = thread.scrollHeight;
    return true;
}

async function send(text) {
    let id = await sessionId();
    let res = await fetch(`/sessions/${id}/messages`, {
        method: "POST",
        headers: { "content-type": "application/json" },
        body: JSON.stringify({ content: text }),
    });
    if (res.status === 404) {
        id = await startSession();
        res = await fetch(`/sessions/${id}/messages`, {
            method: "POST",
            headers: { "content-type": "application/json" },
            body: JSON.stringify({ content: text }),
        });
    }
    await refresh(id);
}

document.getElementById("chat").addEventListener("submit", async (event) => {
    event.preventDefault();
    const text = input.value;
    if (!text) {
        return;
    }
    input.value = "";
    input.disabled = true;
    thinking.style.visibility = "visible";
    try {
        await send(text);
    } finally {
        thinking.style.visibility = "hidden";
        input.disabled = false;
        input.focus();
    }
});

sessionId().then(refresh);
</script>
</body>
</html>
"##;

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;

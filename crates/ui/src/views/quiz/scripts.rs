//! Event-bridge scripts for the focus guard. The bridge owns the webview
//! side: it reports fullscreen/visibility changes over `dioxus.send` and
//! suppresses context-menu, clipboard and devtools shortcuts outright. It
//! watches for `#quiz-run-root` leaving the DOM and uninstalls itself, so
//! every exit path (finish, leave, unmount) tears the listeners down even if
//! the Rust side never got a chance to.

pub(super) fn guard_bridge_script() -> &'static str {
    r#"(function() {
        if (window.__prepQuizGuard) return;
        const state = window.__prepQuizGuard = { handlers: {}, watchdog: null };
        const send = (message) => {
            try { dioxus.send(message); } catch (_) {}
        };
        state.handlers.fullscreen = () => {
            send(document.fullscreenElement ? "fullscreen-restored" : "fullscreen-exited");
        };
        state.handlers.visibility = () => {
            send(document.hidden ? "tab-hidden" : "tab-visible");
        };
        state.handlers.block = (event) => {
            event.preventDefault();
        };
        state.handlers.keydown = (event) => {
            const ctrl = event.ctrlKey || event.metaKey;
            const devtools = ctrl && event.shiftKey
                && ["I", "i", "C", "c", "J", "j"].includes(event.key);
            const viewSource = ctrl && ["U", "u"].includes(event.key);
            if (event.key === "F12" || devtools || viewSource) {
                event.preventDefault();
            }
        };
        document.addEventListener("fullscreenchange", state.handlers.fullscreen);
        document.addEventListener("visibilitychange", state.handlers.visibility);
        document.addEventListener("contextmenu", state.handlers.block);
        document.addEventListener("copy", state.handlers.block);
        document.addEventListener("keydown", state.handlers.keydown);
        window.__prepQuizGuardUninstall = () => {
            const state = window.__prepQuizGuard;
            if (!state) return;
            document.removeEventListener("fullscreenchange", state.handlers.fullscreen);
            document.removeEventListener("visibilitychange", state.handlers.visibility);
            document.removeEventListener("contextmenu", state.handlers.block);
            document.removeEventListener("copy", state.handlers.block);
            document.removeEventListener("keydown", state.handlers.keydown);
            if (state.watchdog) clearInterval(state.watchdog);
            delete window.__prepQuizGuard;
            delete window.__prepQuizGuardUninstall;
            if (document.fullscreenElement && document.exitFullscreen) {
                document.exitFullscreen().catch(() => {});
            }
        };
        state.watchdog = setInterval(() => {
            if (!document.getElementById("quiz-run-root")) {
                window.__prepQuizGuardUninstall && window.__prepQuizGuardUninstall();
            }
        }, 1000);
        if (document.documentElement.requestFullscreen) {
            document.documentElement.requestFullscreen().then(
                () => send("fullscreen-restored"),
                () => {},
            );
        }
    })();"#
}

pub(super) const REQUEST_FULLSCREEN: &str = r#"(function() {
    if (!document.fullscreenElement && document.documentElement.requestFullscreen) {
        document.documentElement.requestFullscreen().catch(() => {});
    }
})();"#;

pub(super) const GUARD_UNINSTALL: &str = r#"(function() {
    if (window.__prepQuizGuardUninstall) window.__prepQuizGuardUninstall();
})();"#;

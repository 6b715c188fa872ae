//! Static prose sections of the docs page.
//!
//! Heading ids must match the table of contents anchors in site.json.

use dioxus::prelude::*;

const REPOSITORY_URL: &str = "https://github.com/vorlie/wot-replay-manager.git";
const BOTTLES_URL: &str = "https://usebottles.com/";

const RESOURCES: &[(&str, &str)] = &[
    ("uv CLI Reference", "https://docs.astral.sh/uv/reference/cli/"),
    ("uv Getting Started", "https://docs.astral.sh/uv/getting-started/"),
    (
        "uv Install Python Guide",
        "https://docs.astral.sh/uv/guides/install-python/",
    ),
    (
        "uv Installation",
        "https://docs.astral.sh/uv/getting-started/installation/",
    ),
    ("uv Scripts Guide", "https://docs.astral.sh/uv/guides/scripts/"),
    ("Bottles Website", BOTTLES_URL),
];

const FEATURES: &[(&str, &str)] = &[
    (
        "Launch Replays",
        "Launches selected replays using your bottles-cli configuration on Linux or directly with your local game installation on Windows.",
    ),
    (
        "Detailed Information",
        "Displays key replay metadata, including player name, tank, map, date, damage dealt, and game version.",
    ),
    (
        "Replay Listing",
        "Automatically detects and lists .wotreplay files from your specified directory.",
    ),
    (
        "Sorting",
        "Sort your replay list by date, player name, tank, map, or damage.",
    ),
    (
        "Persistent Settings",
        "Saves your specified paths so you only need to configure them once.",
    ),
    (
        "Automatic Cleanup",
        "Identifies and allows you to delete old replays that are incompatible with your current client version, saving you disk space.",
    ),
    (
        "Cross-Platform Compatibility",
        "Supports both Windows and Linux operating systems.",
    ),
];

/// Link that opens in a new tab
#[component]
fn ExternalLink(href: String, children: Element) -> Element {
    rsx! {
        a { href: "{href}", target: "_blank", rel: "noopener noreferrer", {children} }
    }
}

/// Shell command block
#[component]
fn CommandBlock(command: String) -> Element {
    rsx! {
        pre { code { "{command}" } }
    }
}

#[component]
pub fn Overview(title: String) -> Element {
    rsx! {
        h1 { class: "title", id: "home", "{title}" }
        p { class: "paragraph",
            "The WoT Replay Manager is a desktop application built with Python and PyQt6 that helps you manage and launch your World of Tanks replays. It provides a user-friendly interface to sort, view, and launch replay files, as well as clean up old replays that are no longer compatible with the current game version."
        }
        ul { class: "list",
            for (name , description) in FEATURES.iter() {
                li { key: "{name}",
                    strong { "{name}:" }
                    " {description}"
                }
            }
        }
    }
}

#[component]
pub fn Prerequisites() -> Element {
    rsx! {
        h2 { class: "subtitle", id: "prerequisites", "Prerequisites" }
        p { class: "paragraph", "To run this application, you will need:" }

        h3 { class: "subsection", id: "resources", "0. Resources" }
        ul { class: "link-list",
            for (label , href) in RESOURCES.iter() {
                li { key: "{href}-{label}",
                    ExternalLink { href: href.to_string(), "{label}" }
                }
            }
        }

        h3 { class: "subsection", id: "install-python", "1. Python 3.x" }
        p { class: "paragraph",
            "Make sure Python is installed on your system. If not, you can run:"
        }
        CommandBlock { command: "pip install uv".to_string() }
        p { class: "paragraph",
            "On Linux, you may need to use "
            code { class: "code", "python3" }
            " and "
            code { class: "code", "pip3" }
            " instead of "
            code { class: "code", "python" }
            " and "
            code { class: "code", "pip" }
            " in your commands."
        }

        h3 { class: "subsection", id: "project-files", "2. Project Files" }
        p { class: "paragraph",
            "Download or clone the project files from the GitHub repository:"
        }
        pre {
            code {
                "git clone "
                ExternalLink { href: REPOSITORY_URL.to_string(), "{REPOSITORY_URL}" }
            }
        }

        h3 { class: "subsection", id: "create-venv", "3. Create a Virtual Environment with uv" }
        p { class: "paragraph",
            "It's a best practice to install project dependencies in a virtual environment to avoid conflicts with other Python projects. Using "
            code { class: "code", "uv" }
            " is the fastest way to set this up. Open your terminal or command prompt and run the following command inside the project directory root:"
        }
        CommandBlock { command: "uv venv".to_string() }

        h3 { class: "subsection", id: "install-dependencies", "4. Install Dependencies" }
        p { class: "paragraph",
            "With your virtual environment created, you can install all necessary libraries by running a single command:"
        }
        CommandBlock { command: "uv pip install -r requirements.txt".to_string() }

        h3 { class: "subsection", id: "bottles-cli", "5. Bottles CLI (Optional, for replay playback)" }
        p { class: "paragraph",
            "This tool is typically used on Linux systems for managing Windows applications."
        }
        p { class: "paragraph",
            "This step can be skipped if you are using Windows, as replays will launch with your local game installation."
        }
        p { class: "paragraph",
            "It is required to launch replays with your World of Tanks executable if you are on Linux. The rest of the application's features will work without it."
        }
        p { class: "paragraph",
            "You can find more information about Bottles and its CLI on the official website: "
            ExternalLink { href: BOTTLES_URL.to_string(), "{BOTTLES_URL}" }
        }

        h3 { class: "subsection", id: "run-app", "6. How to Run the Application" }
        p { class: "paragraph",
            "With the virtual environment created and dependencies installed, you can run the application directly from your terminal."
        }
        p { class: "paragraph",
            "Using "
            code { class: "code", "uv run" }
            " will automatically use the correct virtual environment:"
        }
        CommandBlock { command: "uv run python main.py".to_string() }
    }
}

#[component]
pub fn HowToUse() -> Element {
    rsx! {
        h2 { class: "subtitle", id: "how-to-use", "How to Use" }

        h3 { class: "subsection", id: "first-time-setup", "1. First-Time Setup" }
        p { class: "paragraph",
            "Upon first launch, the application will prompt you to configure the necessary settings. You will need to provide the following paths:"
        }
        ul { class: "list",
            li {
                strong { "Bottles Bottle Name" }
                " (Linux only): The name of the Bottles container where World of Tanks is installed (e.g., "
                code { class: "code", "WindowsGames" }
                "). This setting will be ignored on Windows."
            }
            li {
                strong { "WoT Executable Path" }
                ": The full path to your "
                code { class: "code", "WorldOfTanks.exe" }
                " file."
            }
            li {
                strong { "Replays Folder Path" }
                ": The folder where your "
                code { class: "code", ".wotreplay" }
                " files are saved."
            }
            li {
                strong { "Client Version XML Path" }
                ": The path to the "
                code { class: "code", "version.xml" }
                " file in your World of Tanks game directory (used for replay cleanup)."
            }
        }
        p { class: "paragraph",
            "The file dialogs will automatically open in the last known game directory to make it easier to find the correct files."
        }

        h3 { class: "subsection", id: "managing-replays", "2. Managing Replays" }
        ul { class: "list",
            li { "The main window will display a list of all detected replays." }
            li {
                "Use the \""
                strong { "Sort by" }
                "\" dropdown menu to change the order of the replay list."
            }
            li {
                "Select a replay from the list and click the \""
                strong { "Launch Replay" }
                "\" button to start the replay in World of Tanks."
            }
        }

        h3 { class: "subsection", id: "cleanup-old-replays", "3. Cleaning Up Old Replays" }
        ul { class: "list",
            li {
                "Click the \""
                strong { "Cleanup Old Replays" }
                "\" button to find and delete replays that are no longer compatible with your current game version."
            }
            li {
                "A confirmation dialog will appear, showing you how many replays are about to be deleted."
            }
            li { "This feature helps you free up disk space by removing outdated files." }
        }
    }
}

#[component]
pub fn CodeStructure() -> Element {
    rsx! {
        h2 { class: "subtitle", id: "code-structure", "Code Structure" }
        ul { class: "list",
            li {
                code { class: "code", "main.py" }
                ": The main application file containing the ReplayManager and SettingsDialog classes. It handles the UI, user interactions, and core application logic."
            }
            li {
                code { class: "code", "utils/__init__.py" }
                ": Contains helper functions, such as get_replay_data, which is responsible for parsing the replay files and extracting metadata."
            }
        }
    }
}

#[component]
pub fn Disclaimer() -> Element {
    rsx! {
        div { class: "disclaimer",
            p {
                "This project is an independent, community-developed tool. It is "
                strong { "not affiliated with, endorsed by, or supported by Wargaming.net" }
                "."
            }
            p {
                em { "World of Tanks" }
                " and all related trademarks and copyrights are the property of Wargaming.net. All other trademarks and intellectual property belong to their respective owners."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wrm_common::SiteContent;

    #[allow(non_snake_case)]
    fn DocsPage() -> Element {
        rsx! {
            Overview { title: "WoT Replay Manager".to_string() }
            Prerequisites {}
            HowToUse {}
            CodeStructure {}
            Disclaimer {}
        }
    }

    fn render_page() -> String {
        let mut dom = VirtualDom::new(DocsPage);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_every_toc_anchor_has_a_heading() {
        let content = SiteContent::embedded().unwrap();
        let html = render_page();
        for anchor in content.anchors() {
            assert!(
                html.contains(&format!(r#"id="{}""#, anchor)),
                "No heading with id '{}'",
                anchor
            );
        }
    }

    #[test]
    fn test_disclaimer_keeps_emphasis() {
        let html = render_page();
        assert!(html.contains(
            "<strong>not affiliated with, endorsed by, or supported by Wargaming.net</strong>"
        ));
        assert!(html.contains("<em>World of Tanks</em>"));
    }
}

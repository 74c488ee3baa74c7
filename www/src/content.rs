//! Literal copy of the home page.
//!
//! Each function returns a fresh value, so callers may consume it freely.
//! Bullet order is display order and communicates priority.

use crate::types::{
    AssetKey, DistributionEntry, DistributionShowcase, FeatureItem, FeatureList, Header, HomePage,
    NavLink, RichText,
};

/// Route of the header call-to-action.
pub const GETTING_STARTED_ROUTE: &str = "/docs/getting-started";

pub const DEBIAN_LOGO: &str = "img/logos/debian.svg";
pub const ALPINE_LINUX_LOGO: &str = "img/logos/alpine-linux.svg";
pub const RASPIOS_LOGO: &str = "img/logos/raspios.png";

pub fn home_page() -> HomePage {
    HomePage {
        header: header(),
        update_mechanism: update_mechanism(),
        development_tool: development_tool(),
        showcase: supported_distributions(),
    }
}

pub fn header() -> Header {
    Header {
        title: "Robust Building Blocks for Embedded Linux Devices".into(),
        tagline: RichText::new()
            .text("An open-source tool suite to build ")
            .em("reliable")
            .text(" embedded Linux devices with ")
            .em("efficient and secure over-the-air")
            .text(" update capabilities."),
        description: RichText::new()
            .strong("Companies around the world use Rugix as a basis for their connected products.")
            .text(" Currently, the tool suite consists of two main tools: ")
            .em("Rugix Ctrl")
            .text(", a tool for installing over-the-air updates and managing state, and ")
            .em("Rugix Bakery")
            .text(
                ", a flexible, user-friendly build system for bespoke Linux distributions. \
                 Rugix simplifies the development of embedded Linux devices, ",
            )
            .strong(
                "enabling you to focus on what provides value to your users instead of \
                 system-level details",
            )
            .text(". With Rugix, you get better results faster and at a lower cost."),
        action: NavLink::new("Get Started 🚀", GETTING_STARTED_ROUTE),
    }
}

pub fn update_mechanism() -> FeatureList {
    FeatureList {
        heading: "Rugix Ctrl: The Update Mechanism".into(),
        intro: RichText::from(
            "Rugix Ctrl has all features you would expect from a state-of-the-art update \
             solution and more:",
        ),
        subheading: None,
        items: vec![
            FeatureItem::new(
                RichText::new()
                    .strong("Atomic A/B system updates")
                    .text(" with popular bootloaders out of the box."),
            ),
            FeatureItem::new(
                RichText::new()
                    .strong("Streaming updates")
                    .text(" as well as ")
                    .strong("adaptive delta updates")
                    .text(" out of the box."),
            ),
            FeatureItem::new(
                RichText::new()
                    .text("Builtin ")
                    .strong("cryptographic integrity checks")
                    .text(" ")
                    .em("before")
                    .text(" installing anything anywhere."),
            ),
            FeatureItem::new(
                RichText::new()
                    .text("Supports ")
                    .strong("any update scenario")
                    .text(", including ")
                    .strong("non-A/B updates and incremental updates")
                    .text("."),
            ),
            FeatureItem::new(
                RichText::new()
                    .text("Supports ")
                    .strong("any bootloader and boot process")
                    .text(" through ")
                    .link(NavLink::new(
                        RichText::new().text("custom ").em("boot flows"),
                        "https://rugix.org/docs/ctrl/advanced/boot-flows",
                    ))
                    .text("."),
            ),
            FeatureItem::new(
                RichText::new()
                    .strong("Robust state management mechanism")
                    .text(" inspired by container-based architectures."),
            ),
            FeatureItem::new(
                RichText::new()
                    .text("Integrates well with ")
                    .link(NavLink::new(
                        "different fleet management solutions",
                        "https://rugix.org/docs/ctrl/advanced/fleet-management",
                    ))
                    .text(" (avoids vendor lock-in)."),
            ),
            FeatureItem::new("Provides powerful interfaces to built your own update workflow upon."),
        ],
        summary: RichText::new()
            .text("Rugix Ctrl ")
            .strong("supports or can be adapted to almost any requirements you may have")
            .text(
                " when it comes to robust and secure updates of your entire system as well as \
                 its individual components.",
            ),
    }
}

pub fn development_tool() -> FeatureList {
    FeatureList {
        heading: "Rugix Bakery: The Development Tool".into(),
        intro: RichText::new()
            .text(
                "You wrote your application and now need to integrate it into a full system \
                 ready to be flashed onto your device or deployed as an update? Rugix Bakery \
                 makes this process (almost) ",
            )
            .strong(
                "as easy as writing a Dockerfile, enabling you to focus on what provides value \
                 to your users",
            )
            .text(" instead of system-level details."),
        subheading: Some("Feature Highlights".into()),
        items: vec![
            FeatureItem::new(
                RichText::new()
                    .strong("Over-the-air update capabilities")
                    .text(" powered by Rugix Ctrl out of the box."),
            ),
            FeatureItem::new(
                RichText::new()
                    .text("Build everything ")
                    .strong("from source to image in a container-based environment."),
            ),
            FeatureItem::new(
                RichText::new()
                    .text("Define ")
                    .strong("multiple system variants")
                    .text(", including variants for testing."),
            ),
            FeatureItem::new(
                RichText::new()
                    .text("Builtin ")
                    .strong("system testing framework")
                    .text(" and ")
                    .strong("support for running VMs")
                    .text("."),
            ),
        ],
        summary: RichText::new()
            .text("With Rugix Bakery, you get a ")
            .strong("comprehensive tool to build, test, and run your system")
            .text(
                " similar to what you will find with modern software development tooling, like ",
            )
            .link(NavLink::new("Cargo", "https://doc.rust-lang.org/cargo"))
            .text(" (Rust) or ")
            .link(NavLink::new("uv", "https://docs.astral.sh/uv/"))
            .text(" (Python)."),
    }
}

pub fn supported_distributions() -> DistributionShowcase {
    DistributionShowcase {
        heading: "Supported Distributions".into(),
        intro: RichText::new()
            .text("Rugix Bakery allows you to build upon proven distributions such as ")
            .link(NavLink::external("Debian", "https://www.debian.org/"))
            .text(", ")
            .link(NavLink::external("Alpine Linux", "https://alpinelinux.org/"))
            .text(", and ")
            .link(NavLink::external(
                "Raspberry Pi OS",
                "https://www.raspberrypi.com/software/",
            ))
            .text("."),
        entries: vec![
            DistributionEntry {
                name: "Debian".into(),
                url: "https://www.debian.org/".into(),
                logo: AssetKey::new(DEBIAN_LOGO),
                logo_width: None,
            },
            DistributionEntry {
                name: "Alpine Linux".into(),
                url: "https://alpinelinux.org/".into(),
                logo: AssetKey::new(ALPINE_LINUX_LOGO),
                logo_width: Some(200),
            },
            DistributionEntry {
                name: "Raspberry Pi OS".into(),
                url: "https://www.raspberrypi.com/".into(),
                logo: AssetKey::new(RASPIOS_LOGO),
                logo_width: None,
            },
        ],
        outro: RichText::new()
            .text("It can also be used with root filesystems generated by other tools, e.g., ")
            .link(NavLink::external("Yocto Project", "https://www.yoctoproject.org/"))
            .text(" or ")
            .link(NavLink::external("Buildroot", "https://buildroot.org/"))
            .text("."),
    }
}

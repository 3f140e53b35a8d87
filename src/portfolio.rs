use chrono::{DateTime, Datelike};

pub const OWNER: &str = "Andrzej Sienkiewicz";
pub const GITHUB_PROFILE: &str = "https://github.com/mjnoach";
pub const LINKEDIN_PROFILE: &str = "https://www.linkedin.com/in/andrzej-sienkiewicz/";

/// Hero menu entries: label and the id of the section they jump to.
pub const MENU: [(&str, &str); 3] = [
    ("About", "about"),
    ("Portfolio", "portfolio"),
    ("Contact", "contact"),
];

pub const ABOUT: [&str; 3] = [
    "I specialize in providing top-tier IT services and consulting, tailored to meet the unique needs of businesses. With extensive expertise in full stack development, my primary technology stack includes TypeScript, React.js, and Node.js, though I have experience with a broad range of technologies and programming languages, such as PHP, SQL, Docker, Kubernetes, GraphQL, and Ruby. My professional background encompasses both independent contracting and full-time roles, collaborating with international teams on remote and on-site projects.",
    "My services focus on delivering comprehensive IT solutions, from building and maintaining customer-facing and internal web applications to extending functionalities of existing systems. Additionally, I have experience in improving software release processes, enhancing SEO metrics, and developing open-source projects, showcasing a commitment to innovation and community contributions.",
    "I am dedicated to providing efficient, reliable, and scalable solutions that drive business success. By leveraging my expertise and logical approach, I help businesses navigate the complexities of technology, ensuring seamless integration and optimal performance. My continuous learning ethos ensures I stay ahead of industry trends, delivering cutting-edge solutions and strategic IT consulting to my clients.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Github,
    External,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectLink {
    pub kind: LinkKind,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub links: &'static [ProjectLink],
}

pub const PROJECTS: [Project; 2] = [
    Project {
        title: "Video Trim & Export Tool",
        description: "The Video Trim & Export Tool is a browser-based web application that allows users to upload a video, trim it to the desired length, and export it as MP4, MP3, or GIF. Featuring a clean, modern interface, this tool is built with React.js and leverages ffmpeg.wasm for client-side processing. This ensures quick and secure handling of video files without the need for server-side operations.",
        image: "/images/video-export-project.png",
        links: &[ProjectLink {
            kind: LinkKind::External,
            href: "https://video-export.vercel.app/",
        }],
    },
    Project {
        title: "Strapi Cron Plugin",
        description: "The Strapi Cron Plugin is an open-source addition to the Strapi CMS, designed to simplify the creation, testing, and monitoring of server jobs directly from the CMS dashboard. Built with Node.js and React.js, this plugin adheres to the Strapi Design System guidelines, ensuring seamless integration and a consistent user experience. By providing an intuitive interface, it enhances the functionality of Strapi, improving user workflows and the utility of the CMS.",
        image: "/images/strapi-project.png",
        links: &[
            ProjectLink {
                kind: LinkKind::Github,
                href: "https://github.com/innovato/strapi-plugin-cron",
            },
            ProjectLink {
                kind: LinkKind::External,
                href: "https://www.npmjs.com/package/@innovato/strapi-plugin-cron",
            },
        ],
    },
];

/// Cards alternate: odd cards put the image in the left column.
pub fn image_leads(index: usize) -> bool {
    index % 2 == 1
}

/// Year of an RFC 3339 timestamp, used for the footer.
pub fn copyright_year(timestamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|dt| dt.year())
}

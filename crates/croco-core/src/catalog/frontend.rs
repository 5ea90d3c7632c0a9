use super::{ids, RenderParams, Template};

pub(super) const TEMPLATES: &[Template] = &[
    Template::fixed(ids::FRONTEND_PACKAGE_JSON, frontend_package_json),
    Template::fixed(ids::ASTRO_CONFIG, astro_config),
    Template::fixed(ids::CN_UTILITY, cn_utility),
];

/// Entries only the full skeleton carries.
pub(super) const FULL_TEMPLATES: &[Template] = &[
    Template::fixed(ids::GLOBAL_STYLES, global_styles),
    Template::parameterized(ids::BASE_LAYOUT, base_layout),
    Template::parameterized(ids::INDEX_PAGE, index_page),
    Template::fixed(ids::HEADER_COMPONENT, header_component),
];

fn frontend_package_json(_: &RenderParams) -> String {
    r#"{
  "name": "frontend",
  "type": "module",
  "version": "0.0.1",
  "scripts": {
    "dev": "astro dev",
    "build": "astro build",
    "preview": "astro preview",
    "astro": "astro"
  },
  "dependencies": {
    "@astrojs/react": "^4.3.0",
    "@tailwindcss/vite": "^4.1.11",
    "@types/react": "^19.1.8",
    "@types/react-dom": "^19.1.6",
    "astro": "^5.12.3",
    "clsx": "2.1.1",
    "lucide-react": "0.526.0",
    "react": "^19.1.0",
    "react-dom": "^19.1.0",
    "tailwind-merge": "3.3.1",
    "tailwindcss": "^4.1.11"
  }
}"#
    .to_string()
}

fn astro_config(_: &RenderParams) -> String {
    r"import { defineConfig } from 'astro/config';
import react from '@astrojs/react';
import tailwind from '@tailwindcss/vite';

export default defineConfig({
  integrations: [react()],
  vite: {
    plugins: [tailwind()]
  }
});"
    .to_string()
}

fn cn_utility(_: &RenderParams) -> String {
    r#"import { clsx, type ClassValue } from "clsx";
import { twMerge } from "tailwind-merge";

export function cn(...inputs: ClassValue[]) {
  return twMerge(clsx(inputs));
}"#
    .to_string()
}

fn global_styles(_: &RenderParams) -> String {
    r#"@import "tailwindcss";

:root {
  color-scheme: dark;
}

body {
  font-family: ui-sans-serif, system-ui, sans-serif;
}"#
    .to_string()
}

fn base_layout(params: &RenderParams) -> String {
    format!(
        r#"---
import '../styles/global.css';

interface Props {{
  title?: string;
}}

const {{ title = '{name}' }} = Astro.props;
---

<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width" />
    <title>{{title}}</title>
  </head>
  <body class="min-h-screen bg-slate-950 text-slate-100 antialiased">
    <slot />
  </body>
</html>"#,
        name = params.project_name()
    )
}

fn index_page(params: &RenderParams) -> String {
    format!(
        r#"---
import Layout from '../layouts/Layout.astro';
import {{ Header }} from '../components/Header';
---

<Layout>
  <Header client:load />
  <main class="mx-auto max-w-3xl px-6 py-16">
    <h1 class="text-4xl font-bold">{name}</h1>
    <p class="mt-4 text-slate-400">Edit <code>src/pages/index.astro</code> to get started.</p>
  </main>
</Layout>"#,
        name = params.project_name()
    )
}

fn header_component(_: &RenderParams) -> String {
    r#"import { Rocket } from 'lucide-react';
import { cn } from '../utils/cn';

interface HeaderProps {
  className?: string;
}

export function Header({ className }: HeaderProps) {
  return (
    <header className={cn('flex items-center gap-2 border-b border-slate-800 px-6 py-4', className)}>
      <Rocket className="h-5 w-5" />
      <span className="font-semibold">Croco</span>
    </header>
  );
}"#
    .to_string()
}

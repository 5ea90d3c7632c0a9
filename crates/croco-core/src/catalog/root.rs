use super::{ids, RenderParams, Template};

pub(super) const TEMPLATES: &[Template] = &[
    Template::parameterized(ids::ROOT_PACKAGE_JSON, root_package_json),
    Template::fixed(ids::ROOT_TSCONFIG, root_tsconfig),
    Template::fixed(ids::ENV_FILE, env_file),
    Template::fixed(ids::GITIGNORE, gitignore),
    Template::fixed(ids::TURBO_CONFIG, turbo_config),
];

fn root_package_json(params: &RenderParams) -> String {
    format!(
        r#"{{
  "name": "{name}",
  "private": true,
  "scripts": {{
    "co": "sui-mono commit",
    "test": "echo \"Error: no test specified\" && exit 1",
    "dev": "turbo run dev --parallel"
  }},
  "devDependencies": {{
    "@s-ui/mono": "2.45.0",
    "ts-standard": "12.0.2",
    "turbo": "2.5.5"
  }}
}}"#,
        name = params.project_name()
    )
}

fn root_tsconfig(_: &RenderParams) -> String {
    r#"{
  "compilerOptions": {
    "target": "ES2020",
    "useDefineForClassFields": true,
    "lib": ["ES2020", "DOM", "DOM.Iterable"],
    "module": "ESNext",
    "skipLibCheck": true,
    "moduleResolution": "bundler",
    "allowImportingTsExtensions": true,
    "resolveJsonModule": true,
    "isolatedModules": true,
    "noEmit": true,
    "jsx": "react-jsx",
    "strict": true,
    "noUnusedLocals": true,
    "noUnusedParameters": true,
    "noFallthroughCasesInSwitch": true
  },
  "include": ["apps/**/*", "packages/**/*"],
  "exclude": ["node_modules", "dist"]
}"#
    .to_string()
}

fn env_file(_: &RenderParams) -> String {
    "PORT=3000\nDATABASE_URL=your_database_url_here".to_string()
}

fn gitignore(_: &RenderParams) -> String {
    r"# Dependencies
node_modules/
.pnp
.pnp.js

# Production builds
dist/
build/

# Environment variables
.env
.env.local
.env.development.local
.env.test.local
.env.production.local

# Logs
npm-debug.log*
yarn-debug.log*
yarn-error.log*
lerna-debug.log*

# Runtime data
pids
*.pid
*.seed
*.pid.lock

# Coverage directory used by tools like istanbul
coverage/
*.lcov

# nyc test coverage
.nyc_output

# Dependency directories
node_modules/
jspm_packages/

# Optional npm cache directory
.npm

# Optional eslint cache
.eslintcache

# Optional REPL history
.node_repl_history

# Output of 'npm pack'
*.tgz

# Yarn Integrity file
.yarn-integrity

# dotenv environment variables file
.env
.env.test

# parcel-bundler cache (https://parceljs.org/)
.cache
.parcel-cache

# next.js build output
.next

# nuxt.js build output
.nuxt

# vuepress build output
.vuepress/dist

# Serverless directories
.serverless/

# FuseBox cache
.fusebox/

# DynamoDB Local files
.dynamodb/

# TernJS port file
.tern-port

# IDE
.vscode/
.idea/
*.swp
*.swo
*~

# OS generated files
.DS_Store
.DS_Store?
._*
.Spotlight-V100
.Trashes
ehthumbs.db
Thumbs.db"
        .to_string()
}

fn turbo_config(_: &RenderParams) -> String {
    r#"{
  "$schema": "https://turbo.build/schema.json",
  "pipeline": {
    "dev": {
      "cache": false,
      "persistent": true
    },
    "build": {
      "dependsOn": ["^build"],
      "outputs": ["dist/**", ".next/**", "!.next/cache/**"]
    },
    "test": {
      "dependsOn": ["^build"]
    }
  }
}"#
    .to_string()
}

use super::{ids, RenderParams, Template};

pub(super) const TEMPLATES: &[Template] = &[
    Template::fixed(ids::TYPES_PACKAGE_JSON, types_package_json),
    Template::fixed(ids::TYPES_INDEX, types_index),
];

fn types_package_json(_: &RenderParams) -> String {
    r#"{
  "name": "types",
  "version": "1.0.0",
  "type": "module",
  "main": "index.ts",
  "dependencies": {
    "zod": "^3.22.4"
  }
}"#
    .to_string()
}

fn types_index(_: &RenderParams) -> String {
    r"import { z } from 'zod';

// Common schemas
export const UserSchema = z.object({
  id: z.string(),
  name: z.string(),
  email: z.string().email()
});

export const ApiResponseSchema = z.object({
  success: z.boolean(),
  data: z.any().optional(),
  error: z.string().optional()
});

// Export types
export type User = z.infer<typeof UserSchema>;
export type ApiResponse<T = any> = {
  success: boolean;
  data?: T;
  error?: string;
};"
    .to_string()
}

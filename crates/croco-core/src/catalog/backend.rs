use super::{ids, RenderParams, Template};

pub(super) const TEMPLATES: &[Template] = &[
    Template::fixed(ids::BACKEND_PACKAGE_JSON, backend_package_json),
    Template::fixed(ids::BACKEND_TSCONFIG, backend_tsconfig),
    Template::fixed(ids::EXPRESS_SERVER, express_server),
    Template::fixed(ids::ERRORS, errors),
    Template::fixed(ids::ERROR_HANDLER, error_handler),
    Template::fixed(ids::ROUTES_INDEX, routes_index),
    Template::fixed(ids::EXAMPLE_CONTROLLER, example_controller),
    Template::fixed(ids::EXAMPLE_MODEL, example_model),
];

fn backend_package_json(_: &RenderParams) -> String {
    r#"{
  "name": "backend",
  "version": "1.0.0",
  "type": "module",
  "scripts": {
    "test": "echo \"Error: no test specified\" && exit 1",
    "dev": "tsx watch src/index.ts"
  },
  "dependencies": {
    "cors": "2.8.5",
    "express": "5.1.0",
    "morgan": "1.10.0"
  },
  "devDependencies": {
    "@types/cors": "2.8.19",
    "@types/express": "5.0.3",
    "@types/morgan": "1.9.10",
    "dotenv": "16.5.0",
    "tsx": "4.20.3",
    "typescript": "5.8.3"
  }
}"#
    .to_string()
}

fn backend_tsconfig(_: &RenderParams) -> String {
    r#"{
  "compilerOptions": {
    "target": "ES2020",
    "lib": ["ES2020"],
    "module": "ESNext",
    "moduleResolution": "node",
    "esModuleInterop": true,
    "allowSyntheticDefaultImports": true,
    "strict": true,
    "skipLibCheck": true,
    "forceConsistentCasingInFileNames": true,
    "resolveJsonModule": true,
    "isolatedModules": true,
    "noEmit": true,
    "outDir": "./dist",
    "rootDir": "./src"
  },
  "include": ["src/**/*"],
  "exclude": ["node_modules", "dist"]
}"#
    .to_string()
}

fn express_server(_: &RenderParams) -> String {
    r"import express from 'express';
import cors from 'cors';
import morgan from 'morgan';
import dotenv from 'dotenv';
import { errorHandler } from './middleware/errorHandler.js';
import { router } from './routes/index.js';

dotenv.config();

const app = express();
const PORT = process.env.PORT || 3000;

// Middleware
app.use(cors());
app.use(morgan('combined'));
app.use(express.json());

// Routes
app.use('/api', router);

// Error handling middleware (must be last)
app.use(errorHandler);

app.listen(PORT, () => {
  console.log(`Server running on port ${PORT}`);
});"
        .to_string()
}

fn errors(_: &RenderParams) -> String {
    r"export class ApiError extends Error {
  statusCode: number

  constructor (message: string, statusCode: number) {
    super(message)
    this.statusCode = statusCode
  }
}

export class NotFoundError extends ApiError {
  constructor (message = 'Not Found') {
    super(message, 404)
  }
}

export class ValidationError extends ApiError {
  constructor (message = 'Validation Error') {
    super(message, 400)
  }
}

export class UnauthorizedError extends ApiError {
  constructor (message = 'Unauthorized') {
    super(message, 401)
  }
}

export class InternalServerError extends ApiError {
  constructor (message = 'Internal server error') {
    super(message, 500)
  }
}"
    .to_string()
}

fn error_handler(_: &RenderParams) -> String {
    r"import { ApiError } from '../errors.js';
import { Request, Response, NextFunction, ErrorRequestHandler } from 'express';

export const errorHandler: ErrorRequestHandler = (err: Error, _req: Request, res: Response, _next: NextFunction): void => {
  if (err instanceof ApiError) {
    res.status(err.statusCode).json({ error: err.message });
    return;
  }

  res.status(500).json({ error: 'Internal Server Error' });
};"
    .to_string()
}

fn routes_index(_: &RenderParams) -> String {
    r"import { Router } from 'express';
import { exampleController } from '../controllers/exampleController.js';

export const router = Router();

router.get('/health', exampleController.health);
router.get('/example', exampleController.getExample);"
        .to_string()
}

fn example_controller(_: &RenderParams) -> String {
    r"import { Request, Response, NextFunction } from 'express';
import { NotFoundError, ValidationError, InternalServerError } from '../errors.js';

export const exampleController = {
  health: (req: Request, res: Response) => {
    res.json({ status: 'OK', message: 'Server is running' });
  },

  getExample: async (req: Request, res: Response, next: NextFunction) => {
    try {
      // Example logic here
      const data = { message: 'Hello from backend!' };
      res.json({ success: true, data });
    } catch (error) {
      next(new InternalServerError('Something went wrong'));
    }
  }
};"
    .to_string()
}

fn example_model(_: &RenderParams) -> String {
    r"// Example model structure
export interface User {
  id: string;
  name: string;
  email: string;
}

export interface ApiResponse<T> {
  success: boolean;
  data?: T;
  error?: string;
}"
    .to_string()
}

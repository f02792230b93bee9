//! Built-in test file templates, keyed by test type and framework.

use crate::framework::{Framework, TestType};

const UNIT_JEST: &str = r#"import { render, screen, fireEvent } from '@testing-library/react'
import { {{ComponentName}} } from './{{ComponentName}}'
describe('{{ComponentName}}', () => {
  it('should render correctly', () => {
    render(<{{ComponentName}} />)
    expect(screen.getByRole('{{role}}')).toBeInTheDocument()
  })
  it('should handle user interactions', () => {
    const mockHandler = jest.fn()
    render(<{{ComponentName}} onClick={mockHandler} />)
    fireEvent.click(screen.getByRole('button'))
    expect(mockHandler).toHaveBeenCalledTimes(1)
  })
  it('should display correct content', () => {
    const props = { title: 'Test Title' }
    render(<{{ComponentName}} {...props} />)
    expect(screen.getByText('Test Title')).toBeInTheDocument()
  })
})"#;

const UNIT_VITEST: &str = r#"import { describe, it, expect, vi } from 'vitest'
import { render, screen, fireEvent } from '@testing-library/react'
import { {{ComponentName}} } from './{{ComponentName}}'
describe('{{ComponentName}}', () => {
  it('should render without crashing', () => {
    render(<{{ComponentName}} />)
    expect(screen.getByTestId('{{testId}}')).toBeDefined()
  })
  it('should handle props correctly', () => {
    const props = { disabled: true }
    render(<{{ComponentName}} {...props} />)
    expect(screen.getByRole('button')).toBeDisabled()
  })
})"#;

const UNIT_MOCHA: &str = r#"import { expect } from 'chai'
import { render, screen, fireEvent } from '@testing-library/react'
import { {{ComponentName}} } from './{{ComponentName}}'
describe('{{ComponentName}}', () => {
  it('should render correctly', () => {
    render(<{{ComponentName}} />)
    expect(screen.getByRole('{{role}}')).to.exist
  })
  it('should handle user interactions', () => {
    const mockHandler = sinon.spy()
    render(<{{ComponentName}} onClick={mockHandler} />)
    fireEvent.click(screen.getByRole('button'))
    expect(mockHandler.calledOnce).to.be.true
  })
})"#;

const UNIT_JASMINE: &str = r#"describe('{{ComponentName}}', () => {
  it('should render correctly', () => {
    const { container } = render(<{{ComponentName}} />)
    expect(container.querySelector('.{{className}}')).toBeTruthy()
  })
  it('should handle user interactions', () => {
    const mockHandler = jasmine.createSpy('handler')
    const { getByRole } = render(<{{ComponentName}} onClick={mockHandler} />)
    fireEvent.click(getByRole('button'))
    expect(mockHandler).toHaveBeenCalledTimes(1)
  })
})"#;

const INTEGRATION_JEST: &str = r#"import { render, screen, waitFor } from '@testing-library/react'
import userEvent from '@testing-library/user-event'
import { {{ComponentName}} } from './{{ComponentName}}'
import { fetchData } from './api'
jest.mock('./api')
describe('{{ComponentName}} Integration Tests', () => {
  beforeEach(() => {
    (fetchData as jest.Mock).mockResolvedValue({ data: 'mocked data' })
  })
  it('should fetch and display data', async () => {
    render(<{{ComponentName}} />)
    await waitFor(() => {
      expect(screen.getByText('mocked data')).toBeInTheDocument()
    })
    expect(fetchData).toHaveBeenCalledTimes(1)
  })
  it('should handle form submission', async () => {
    render(<{{ComponentName}} />)
    await userEvent.type(screen.getByRole('textbox'), 'test input')
    await userEvent.click(screen.getByRole('button', { name: 'Submit' }))
    await waitFor(() => {
      expect(screen.getByText('Submitted: test input')).toBeInTheDocument()
    })
  })
})"#;

const INTEGRATION_VITEST: &str = r#"import { describe, it, expect, vi } from 'vitest'
import { render, screen, waitFor } from '@testing-library/react'
import userEvent from '@testing-library/user-event'
import { {{ComponentName}} } from './{{ComponentName}}'
import { fetchData } from './api'
vi.mock('./api')
describe('{{ComponentName}} Integration Tests', () => {
  beforeEach(() => {
    (fetchData as vi.Mock).mockResolvedValue({ data: 'mocked data' })
  })
  it('should render with initial state', () => {
    render(<{{ComponentName}} />)
    expect(screen.getByText('Loading...')).toBeInTheDocument()
  })
  it('should update state after data fetch', async () => {
    render(<{{ComponentName}} />)
    await waitFor(() => {
      expect(screen.getByText('mocked data')).toBeInTheDocument()
    })
  })
})"#;

const INTEGRATION_MOCHA: &str = r#"import { expect } from 'chai'
import { render, screen, waitFor } from '@testing-library/react'
import userEvent from '@testing-library/user-event'
import { {{ComponentName}} } from './{{ComponentName}}'
import { fetchData } from './api'
sinon.stub(fetchData, 'fetchData').resolves({ data: 'mocked data' })
describe('{{ComponentName}} Integration Tests', () => {
  afterEach(() => {
    fetchData.fetchData.restore()
  })
  it('should fetch and display data', async () => {
    render(<{{ComponentName}} />)
    await waitFor(() => {
      expect(screen.getByText('mocked data')).to.exist
    })
    expect(fetchData.fetchData.calledOnce).to.be.true
  })
})"#;

const INTEGRATION_JASMINE: &str = r#"describe('{{ComponentName}} Integration Tests', () => {
  let mockFetchData
  beforeEach(() => {
    mockFetchData = jasmine.createSpy('fetchData').and.returnValue(
      Promise.resolve({ data: 'mocked data' })
    )
    spyOn(api, 'fetchData').and.callFake(mockFetchData)
  })
  it('should fetch and display data', async () => {
    const { getByText } = render(<{{ComponentName}} />)
    await waitFor(() => {
      expect(getByText('mocked data')).toBeTruthy()
    })
    expect(mockFetchData).toHaveBeenCalledTimes(1)
  })
})"#;

const E2E_CYPRESS: &str = r#"/// <reference types="cypress" />
describe('{{ComponentName}} E2E Tests', () => {
  beforeEach(() => {
    cy.visit('/path/to/{{ComponentName}}')
  })
  it('should navigate to page and render component', () => {
    cy.get('{{selector}}').should('be.visible')
  })
  it('should handle user flow', () => {
    cy.get('{{inputSelector}}').type('Test Value')
    cy.get('{{buttonSelector}}').click()
    cy.get('{{resultSelector}}').should('contain.text', 'Test Value')
  })
  it('should validate form inputs', () => {
    cy.get('{{buttonSelector}}').click()
    cy.get('{{errorSelector}}').should('be.visible')
    cy.get('{{inputSelector}}').type('Valid Input')
    cy.get('{{errorSelector}}').should('not.exist')
  })
})"#;

const E2E_PLAYWRIGHT: &str = r#"import { test, expect } from '@playwright/test'
test.describe('{{ComponentName}} E2E Tests', () => {
  test('should load page and display component', async ({ page }) => {
    await page.goto('/path/to/{{ComponentName}}')
    await expect(page.locator('{{selector}}')).toBeVisible()
  })
  test('should handle form submission', async ({ page }) => {
    await page.goto('/path/to/{{ComponentName}}')
    await page.locator('{{inputSelector}}').fill('Test Value')
    await page.locator('{{buttonSelector}}').click()
    await expect(page.locator('{{resultSelector}}')).toHaveText('Submitted: Test Value')
  })
  test('should handle navigation', async ({ page }) => {
    await page.goto('/path/to/{{ComponentName}}')
    await page.locator('{{linkSelector}}').click()
    await expect(page).toHaveURL('/new-page')
  })
})"#;

const PERFORMANCE_PLAYWRIGHT: &str = r#"import { test, expect } from '@playwright/test'
test.describe('{{ComponentName}} Performance Tests', () => {
  test('should load within performance budget', async ({ page }) => {
    const start = Date.now()
    await page.goto('/path/to/{{ComponentName}}')
    const loadTime = Date.now() - start
    expect(loadTime).toBeLessThan(2000) // 2 seconds
  })
  test('should render components efficiently', async ({ page }) => {
    await page.goto('/path/to/{{ComponentName}}')
    await page.evaluate(() => {
      window.performance.mark('start-render')
    })
    await page.locator('{{actionSelector}}').click()
    await page.evaluate(() => {
      window.performance.mark('end-render')
      window.performance.measure('render-time', 'start-render', 'end-render')
    })
    const metrics = await page.evaluate(() => {
      return window.performance.getEntriesByName('render-time')[0]
    })
    expect(metrics.duration).toBeLessThan(500) // 500ms
  })
})"#;

const ACCESSIBILITY_PLAYWRIGHT: &str = r#"import { test, expect } from '@playwright/test'
import AxeBuilder from '@axe-core/playwright'
test.describe('{{ComponentName}} Accessibility Tests', () => {
  test('should have no accessibility violations', async ({ page }) => {
    await page.goto('/path/to/{{ComponentName}}')
    const accessibilityScanResults = await new AxeBuilder({ page }).analyze()
    expect(accessibilityScanResults.violations).toHaveLength(0)
  })
  test('should have semantic HTML structure', async ({ page }) => {
    await page.goto('/path/to/{{ComponentName}}')
    const pageSource = await page.content()
    // Check for proper heading structure
    const headings = pageSource.match(/<h[1-6][^>]*>/g) || []
    expect(headings.length).toBeGreaterThan(0)
    // Check for ARIA roles
    expect(pageSource).toContain('role=')
  })
})"#;

/// Template table. Order within a row is the order frameworks are listed to users.
pub const TEMPLATES: &[(TestType, &[(Framework, &str)])] = &[
    (
        TestType::Unit,
        &[
            (Framework::Jest, UNIT_JEST),
            (Framework::Vitest, UNIT_VITEST),
            (Framework::Mocha, UNIT_MOCHA),
            (Framework::Jasmine, UNIT_JASMINE),
        ],
    ),
    (
        TestType::Integration,
        &[
            (Framework::Jest, INTEGRATION_JEST),
            (Framework::Vitest, INTEGRATION_VITEST),
            (Framework::Mocha, INTEGRATION_MOCHA),
            (Framework::Jasmine, INTEGRATION_JASMINE),
        ],
    ),
    (
        TestType::E2e,
        &[
            (Framework::Cypress, E2E_CYPRESS),
            (Framework::Playwright, E2E_PLAYWRIGHT),
        ],
    ),
    (
        TestType::Performance,
        &[(Framework::Playwright, PERFORMANCE_PLAYWRIGHT)],
    ),
    (
        TestType::Accessibility,
        &[(Framework::Playwright, ACCESSIBILITY_PLAYWRIGHT)],
    ),
];

/// Returns the framework row for a test type, if the table has one.
pub fn row(test_type: TestType) -> Option<&'static [(Framework, &'static str)]> {
    TEMPLATES
        .iter()
        .find(|(tt, _)| *tt == test_type)
        .map(|(_, row)| *row)
}
